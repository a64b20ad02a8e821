//! Validated text types shared by the lookup service and the CLI.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty
    #[error("Text cannot be empty")]
    Empty,
}

/// A lowercased, non-empty search term.
///
/// Matching is a plain substring test, so the input is lowercased but never trimmed: a term
/// made only of spaces is still a valid term. Only the empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Creates a new `SearchTerm` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(SearchTerm)` holding the lowercased input,
    /// or `Err(TextError::Empty)` if the input is the empty string.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let input = input.as_ref();
        if input.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input.to_lowercase()))
    }

    /// Returns the lowercased term as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A lowercased free-text chatbot message. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMessage(String);

impl ChatMessage {
    pub fn new(input: impl AsRef<str>) -> Self {
        Self(input.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `keyword` occurs anywhere in the message.
    ///
    /// `keyword` is expected to be lowercase already.
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }
}

impl From<Option<String>> for ChatMessage {
    fn from(value: Option<String>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

impl AsRef<str> for ChatMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
