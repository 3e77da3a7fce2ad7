//! Structured value helpers.

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash).
/// Any other backslash, including a trailing one, is kept as is.
#[must_use]
pub fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some(next @ ('\\' | ',' | ';')) => result.push(next),
            Some('n' | 'N') => result.push('\n'),
            Some(next) => {
                result.push(c);
                result.push(next);
            }
            None => result.push(c),
        }
    }

    result
}

/// Splits a structured value on unescaped `separator` characters.
///
/// `\\` and `\<separator>` are consumed as units and never split; a lone
/// backslash is an ordinary character. Components keep their escapes.
/// Empty components are preserved, but an empty input yields no components.
#[must_use]
pub fn split_structured_value(s: &str, separator: char) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            if chars
                .peek()
                .is_some_and(|&(_, next)| next == '\\' || next == separator)
            {
                chars.next();
            }
        } else if c == separator {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}
