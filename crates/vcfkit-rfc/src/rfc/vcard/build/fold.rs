//! vCard line folding.

use vcfkit_core::config::WriterConfig;
use vcfkit_core::constants::DEFAULT_FOLD_WIDTH;

/// Smallest usable width: the continuation space plus one character.
const MIN_WIDTH: usize = 2;

/// Options for [`fold_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldOptions {
    /// Maximum characters per physical line, continuation space included.
    pub width: usize,
    /// Start the output with a line break and continuation space.
    pub initial_newline: bool,
    /// Line break inserted before each continuation line.
    pub newline: String,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_FOLD_WIDTH,
            initial_newline: true,
            newline: "\n".to_string(),
        }
    }
}

impl From<&WriterConfig> for FoldOptions {
    fn from(config: &WriterConfig) -> Self {
        Self {
            width: config.fold_width,
            ..Self::default()
        }
    }
}

/// Folds a value with the default options.
///
/// The output starts with `"\n "` and every following line with another
/// `"\n "`; each physical line is at most 76 characters long.
#[must_use]
pub fn fold(s: &str) -> String {
    fold_with(s, &FoldOptions::default())
}

/// Folds a value into continuation lines.
///
/// Widths count characters, so multi-byte characters are never split.
/// Without `initial_newline` the first line carries no continuation space
/// and may use the full width.
#[must_use]
pub fn fold_with(s: &str, options: &FoldOptions) -> String {
    let width = options.width.max(MIN_WIDTH);
    let lead_in = format!("{} ", options.newline);

    let mut result = String::with_capacity(s.len() + (s.len() / (width - 1) + 1) * lead_in.len());
    let mut chars = s.chars();

    let first_width = if options.initial_newline {
        result.push_str(&lead_in);
        width - 1
    } else {
        width
    };
    result.extend(chars.by_ref().take(first_width));

    loop {
        let mut chunk = chars.by_ref().take(width - 1).peekable();
        if chunk.peek().is_none() {
            break;
        }

        result.push_str(&lead_in);
        result.extend(chunk);
    }

    result
}
