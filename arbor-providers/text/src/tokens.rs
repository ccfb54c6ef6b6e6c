//! Whitespace tokeniser over buffered input with `#` comment lines.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::TextGraphError;

/// A token together with the 1-based line it was read from.
pub(crate) struct Token {
    pub(crate) text: String,
    pub(crate) line: usize,
}

pub(crate) struct Tokens<R> {
    reader: R,
    line: usize,
    pending: VecDeque<Token>,
    buffer: String,
}

impl<R: BufRead> Tokens<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: VecDeque::new(),
            buffer: String::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>, TextGraphError> {
        while self.pending.is_empty() {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let content = self.buffer.trim_start();
            if content.starts_with('#') {
                continue;
            }
            let line = self.line;
            self.pending.extend(content.split_whitespace().map(|text| Token {
                text: text.to_owned(),
                line,
            }));
        }
        Ok(self.pending.pop_front())
    }

    /// Parses the next token as `T`, naming `expected` in errors.
    pub(crate) fn parse<T: FromStr>(
        &mut self,
        expected: &'static str,
    ) -> Result<(T, usize), TextGraphError> {
        let token = self
            .next_token()?
            .ok_or(TextGraphError::MissingToken { expected })?;
        let value = token
            .text
            .parse()
            .map_err(|_| TextGraphError::InvalidNumber {
                token: token.text.clone(),
                expected,
                line: token.line,
            })?;
        Ok((value, token.line))
    }
}
