use thiserror::Error;

/// Errors raised while building or applying scrambling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrambleError {
    #[error("position {index} is out of range for a password of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("letter '{letter}' not found in password")]
    LetterNotFound { letter: char },

    /// The letter-position rotation cannot be undone unambiguously at this length.
    #[error(
        "rotation based on letter '{letter}' cannot be inverted for a password of length {length}"
    )]
    AmbiguousRotation { letter: char, length: usize },

    #[error("round trip mismatch: '{input}' came back as '{restored}'")]
    RoundTripMismatch { input: String, restored: String },

    #[error("invalid password: only ASCII characters are supported")]
    NonAscii,

    #[error("invalid operation on line {line}: {reason} ('{text}')")]
    Parse {
        line: usize,
        text: String,
        reason: String,
    },
}

impl ScrambleError {
    pub(crate) fn parse(line: usize, text: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            text: text.trim().to_string(),
            reason: reason.into(),
        }
    }
}
