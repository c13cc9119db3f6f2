//! Expression grammar.
//!
//! ```text
//! expression := primary application*
//! primary    := text | number | word
//! application:= "(" [ expression ( "," expression )* [ "," ] ] ")"
//! ```
//!
//! Separators may appear before any token.

use egg_ir::{Expression, Name};
use egg_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Parse one expression, including any chained argument lists.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| {
            self.cursor.skip_separators();
            let primary = self.parse_primary()?;
            self.parse_applications(primary)
        })
    }

    /// Parse a literal or a word at the cursor.
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        if let Some(text) = self.cursor.scan_text() {
            return Ok(Expression::text(text));
        }
        if let Some(number) = self.cursor.scan_number() {
            return Ok(Expression::number(number));
        }
        if let Some(word) = self.cursor.scan_word() {
            return Ok(Expression::word(word));
        }
        Err(ParseError::UnexpectedInput {
            found: self.cursor.excerpt(),
        })
    }

    /// Wrap `expr` in an `Apply` for every argument list that follows it.
    ///
    /// `f(x)(y)` applies the result of `f(x)` to `y`.
    fn parse_applications(&mut self, mut expr: Expression) -> ParseResult<Expression> {
        loop {
            self.cursor.skip_separators();
            if !self.cursor.eat('(') {
                return Ok(expr);
            }
            let args = self.parse_arguments()?;
            trace!(
                operator = expr.as_word().map(Name::as_str),
                args = args.len(),
                "parsed application"
            );
            expr = Expression::apply(expr, args);
        }
    }

    /// Parse a comma-separated argument list after its opening `(`,
    /// consuming the closing `)`.
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut args = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.eat(')') {
                return Ok(args);
            }
            args.push(self.parse_expression()?);

            self.cursor.skip_separators();
            if !self.cursor.eat(',') && !self.cursor.check(')') {
                return Err(ParseError::ExpectedCommaOrParen {
                    found: self.cursor.excerpt(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests;
