//! Recursive descent parser for Egg.
//!
//! Source text goes straight to an [`Expression`] tree; scanning is done
//! on demand by the [`Cursor`] rather than by a separate lexer pass.
//!
//! ```text
//! let expr = egg_parse::parse("+(a, 10)")?;
//! ```

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseResult};

use egg_ir::Expression;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source`.
    pub fn new(source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Parse a whole program: exactly one expression, optionally surrounded
    /// by separators.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse_program(mut self) -> ParseResult<Expression> {
        let expr = self.parse_expression()?;
        self.cursor.skip_separators();
        if !self.cursor.is_at_end() {
            return Err(ParseError::UnexpectedTrailingText {
                found: self.cursor.excerpt(),
            });
        }
        Ok(expr)
    }
}

/// Parse `source` as a single Egg program.
pub fn parse(source: &str) -> ParseResult<Expression> {
    Parser::new(source).parse_program()
}
