use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Static description of one bounded text input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key used both for lookup and in the request payload
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Hard cap on the number of characters the field can hold
    pub max_chars: usize,
    /// Render as a textarea rather than a single-line input
    #[serde(default = "default_true")]
    pub multiline: bool,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>, max_chars: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: None,
            max_chars,
            multiline: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn single_line(mut self) -> Self {
        self.multiline = false;
        self
    }
}

/// Live value of a bounded field.
///
/// The value can only be replaced through [`FieldState::set`], which truncates
/// to `max_chars` characters, so the cap holds after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    max_chars: usize,
}

impl FieldState {
    pub fn new(max_chars: usize) -> Self {
        Self {
            value: String::new(),
            max_chars,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Replace the value with `raw`, keeping only its first `max_chars` characters.
    pub fn set(&mut self, raw: &str) {
        self.value = clamp_chars(raw, self.max_chars).to_string();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    pub fn remaining(&self) -> usize {
        self.max_chars.saturating_sub(self.len_chars())
    }
}

/// Longest prefix of `s` holding at most `max_chars` characters.
///
/// Cuts on a char boundary, never inside a multi-byte sequence.
pub fn clamp_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
