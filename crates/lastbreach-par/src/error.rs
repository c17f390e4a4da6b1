use lastbreach_util::SourceLoc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{loc}: {message}")]
pub struct ParseError {
    pub loc: SourceLoc,
    pub message: String,
}

impl ParseError {
    pub fn new(loc: SourceLoc, message: impl Into<String>) -> Self {
        Self {
            loc,
            message: message.into(),
        }
    }
}

impl From<lastbreach_lex::LexError> for ParseError {
    fn from(e: lastbreach_lex::LexError) -> Self {
        Self {
            loc: e.loc,
            message: e.message,
        }
    }
}
