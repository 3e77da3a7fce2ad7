//! Text clean-up for structured value components.
//!
//! Conversion and merge tools compare components after normalizing white
//! space and punctuation with these helpers.

use icu::properties::CodePointMapData;
use icu::properties::props::{GeneralCategory, GeneralCategoryGroup};

use super::build::escape;
use super::parse::unescape;

/// Punctuation kept by [`remove_punctuations`] unless the caller says otherwise.
pub const DEFAULT_PRESERVED_PUNCTUATION: &str = "()[]{}@#$%-_+=.";

/// Horizontal white space collapsed by [`remove_redundant_whitespaces`].
fn is_horizontal_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0b}' | '\u{0c}')
}

/// Trims the string and collapses runs of spaces, tabs, vertical tabs and
/// form feeds into a single space.
#[must_use]
pub fn remove_redundant_whitespaces(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_run = false;

    for c in s.trim().chars() {
        if is_horizontal_space(c) {
            if !in_run {
                result.push(' ');
            }
            in_run = true;
        } else {
            result.push(c);
            in_run = false;
        }
    }

    result
}

/// Deletes every CR and LF.
#[must_use]
pub fn remove_newlines(s: &str) -> String {
    s.chars().filter(|&c| !matches!(c, '\r' | '\n')).collect()
}

/// Replaces each run of CR/LF characters with `newline`.
#[must_use]
pub fn replace_newlines(s: &str, newline: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_run = false;

    for c in s.chars() {
        if matches!(c, '\r' | '\n') {
            if !in_run {
                result.push_str(newline);
            }
            in_run = true;
        } else {
            result.push(c);
            in_run = false;
        }
    }

    result
}

/// Deletes all Unicode white space.
#[must_use]
pub fn remove_whitespaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Deletes Unicode punctuation, except characters listed in `preserve`.
///
/// Punctuation is any character in the general categories Pc, Pd, Ps, Pe,
/// Pi, Pf or Po.
#[must_use]
pub fn remove_punctuations(s: &str, preserve: &str) -> String {
    let categories = CodePointMapData::<GeneralCategory>::new();

    s.chars()
        .filter(|&c| {
            preserve.contains(c) || !GeneralCategoryGroup::Punctuation.contains(categories.get(c))
        })
        .collect()
}

/// Cleans up one structured value component.
///
/// The component is unescaped, its white space collapsed, its line breaks
/// removed, and the result escaped again.
#[must_use]
pub fn normalize_component(s: &str) -> String {
    let text = unescape(s);
    let text = remove_redundant_whitespaces(&text);
    let text = remove_newlines(&text);
    escape(&text)
}
