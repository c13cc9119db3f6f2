//! Character cursor over Egg source text.
//!
//! Egg has no separate token stream. The parser asks the cursor to skip
//! separators and then to match one of three lexical classes at the start
//! of the remaining input:
//!
//! | Class  | Shape                                                |
//! |--------|------------------------------------------------------|
//! | text   | `"` any non-`"` characters `"`                        |
//! | number | ASCII digits, followed by a word boundary            |
//! | word   | maximal run excluding whitespace, `(`, `)`, `,`, `"` |
//!
//! Separators are whitespace and `#` comments running to end of line.

use tracing::trace;

/// Longest excerpt of remaining input quoted in an error.
const EXCERPT_CHARS: usize = 16;

/// Cursor for scanning source text.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte offset of the cursor.
    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether the next character is `ch`.
    #[inline]
    pub fn check(&self, ch: char) -> bool {
        self.peek() == Some(ch)
    }

    /// Consume `ch` if it is the next character.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.check(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip any mix of whitespace and `#` line comments.
    pub fn skip_separators(&mut self) {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if !trimmed.starts_with('#') {
                return;
            }
            let comment_len = trimmed.find('\n').unwrap_or(trimmed.len());
            self.pos += comment_len;
        }
    }

    /// Scan a quoted text literal, returning its contents without quotes.
    ///
    /// Leaves the cursor untouched if the input does not start with `"` or
    /// the closing quote is missing.
    pub fn scan_text(&mut self) -> Option<&'a str> {
        let body = self.rest().strip_prefix('"')?;
        let close = body.find('"')?;
        let text = &body[..close];
        self.pos += close + 2;
        trace!(text, "scanned text");
        Some(text)
    }

    /// Scan a run of ASCII digits that ends at a word boundary.
    ///
    /// `12abc` and `3_` are not numbers (the digits run into word
    /// characters); `1.5` scans as `1`, leaving `.5` unconsumed.
    pub fn scan_number(&mut self) -> Option<f64> {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        if rest[len..].chars().next().is_some_and(is_word_char) {
            return None;
        }
        let value = rest[..len].parse::<f64>().ok()?;
        self.pos += len;
        trace!(value, "scanned number");
        Some(value)
    }

    /// Scan a word: the longest run of characters that are not whitespace,
    /// parentheses, commas or double quotes.
    pub fn scan_word(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_word_member(c))
            .map_or(rest.len(), |(i, _)| i);
        if len == 0 {
            return None;
        }
        let word = &rest[..len];
        self.pos += len;
        trace!(word, "scanned word");
        Some(word)
    }

    /// Describe the input at the cursor for an error message.
    pub fn excerpt(&self) -> String {
        let rest = self.rest();
        if rest.is_empty() {
            return "end of input".to_string();
        }
        let mut chars = rest.chars();
        let snippet: String = chars.by_ref().take(EXCERPT_CHARS).collect();
        if chars.next().is_some() {
            format!("`{snippet}...`")
        } else {
            format!("`{snippet}`")
        }
    }
}

/// Characters that count as word characters for the number boundary check.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that may appear inside an Egg word.
#[inline]
fn is_word_member(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, '(' | ')' | ',' | '"'))
}
