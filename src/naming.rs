//! Identifier casing helpers
//!
//! Title-casing follows the word-initial rule of Go's `strings.Title`: a letter
//! is upper-cased when it starts the string or follows a separator. ASCII
//! letters, digits and `_` are not separators, so `isActive` becomes
//! `IsActive` and `foo_bar` becomes `Foo_bar`.

use regex::Regex;
use std::sync::LazyLock;

/// Unicode-aware Go identifier: letter or underscore, then letters, digits, underscores
static GO_IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").unwrap());

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Upper-case the first letter of every word
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = ' ';

    for ch in s.chars() {
        if is_separator(prev) {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev = ch;
    }

    out
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphabetic() || c.is_numeric() {
        return false;
    }
    c.is_whitespace()
}

/// Convert camelCase / PascalCase (and spaced or dashed words) to snake_case
///
/// Runs of capitals are kept together as one word: `userID` -> `user_id`,
/// `HTTPServer` -> `http_server`.
pub fn snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c.is_whitespace() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_numeric() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Upper-case the whole string
pub fn upper_case(s: &str) -> String {
    s.to_uppercase()
}

/// Check if a name can be used as a Go identifier
pub fn is_go_identifier(name: &str) -> bool {
    GO_IDENTIFIER_REGEX.is_match(name) && !GO_KEYWORDS.contains(&name)
}
