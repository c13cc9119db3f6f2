//! Parse error types.
//!
//! Errors carry a short excerpt of the input at the failure point rather
//! than a source position.

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, ParseError>;

/// A syntax error found while parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No lexical rule (text, number, word) matches at the cursor.
    #[error("unexpected input: {found}")]
    UnexpectedInput { found: String },
    /// An argument list continues with something other than `,` or `)`.
    #[error("expected ',' or ')', found {found}")]
    ExpectedCommaOrParen { found: String },
    /// A complete expression was read but input remains.
    #[error("unexpected trailing text: {found}")]
    UnexpectedTrailingText { found: String },
}

impl ParseError {
    /// The offending excerpt (or `end of input`).
    pub fn found(&self) -> &str {
        match self {
            ParseError::UnexpectedInput { found }
            | ParseError::ExpectedCommaOrParen { found }
            | ParseError::UnexpectedTrailingText { found } => found,
        }
    }
}
