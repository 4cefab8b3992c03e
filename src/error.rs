use std::fmt::{self, Display};

/// Error returned when a pattern/flags pair cannot be compiled.
///
/// Covers both invalid pattern syntax and flags outside the supported set.
/// Callers must treat this as "the text was never examined", not as zero
/// matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pub message: String,
}

impl PatternError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PatternError {}

impl From<regex::Error> for PatternError {
    fn from(err: regex::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Error returned when a compact token cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token does not split into exactly three non-empty segments.
    Structure,
    /// A segment failed base64url decoding, UTF-8 conversion, or JSON
    /// parsing. Header and payload are all-or-nothing: no partial result
    /// survives this error.
    Decode(String),
}

impl Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Structure => {
                f.write_str("malformed token: expected three dot-separated segments")
            }
            TokenError::Decode(reason) => write!(f, "decode error: {}", reason),
        }
    }
}

impl std::error::Error for TokenError {}
