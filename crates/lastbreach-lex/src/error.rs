use lastbreach_util::SourceLoc;
use thiserror::Error;

/// A fatal lexical error. Display renders exactly `file:line: message`, the
/// wire format the whole pipeline's diagnostics agree on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{loc}: {message}")]
pub struct LexError {
    pub loc: SourceLoc,
    pub message: String,
}

impl LexError {
    pub fn new(loc: SourceLoc, message: impl Into<String>) -> Self {
        Self {
            loc,
            message: message.into(),
        }
    }
}
