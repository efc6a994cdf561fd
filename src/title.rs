use derive_ex::Ex;
use parse_display::Display;
use serde::{Deserialize, Serialize};


/// Rules a new task title must satisfy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Ex)]
#[derive_ex(Default)]
#[serde(default)]
pub struct TitleRules {
    /// Minimum number of characters.
    #[default(3)]
    pub min_len: usize,
}

impl TitleRules {
    /// Create rules requiring at least `min_len` characters.
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }
}

/// Reason a candidate title was rejected.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum TitleError {
    #[display("title is empty")]
    Empty,
    #[display("title starts with whitespace")]
    LeadingWhitespace,
    #[display("title contains a line break")]
    LineBreak,
    #[display("title has {len} characters, at least {min} required")]
    TooShort { len: usize, min: usize },
}

impl std::error::Error for TitleError {}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Checks `text` against `rules`.
///
/// Checks run in a fixed order and the first failing one is reported.
pub fn validate_title(text: &str, rules: &TitleRules) -> Result<(), TitleError> {
    let Some(first) = text.chars().next() else {
        return Err(TitleError::Empty);
    };
    if first.is_whitespace() {
        return Err(TitleError::LeadingWhitespace);
    }
    if text.chars().any(is_line_terminator) {
        return Err(TitleError::LineBreak);
    }
    let len = text.chars().count();
    if len < rules.min_len {
        return Err(TitleError::TooShort {
            len,
            min: rules.min_len,
        });
    }
    Ok(())
}

/// Returns the form of `text` that is stored as a task title.
pub fn normalize_title(text: &str) -> &str {
    text.trim()
}
