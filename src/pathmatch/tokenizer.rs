//! Single-pass lexer for path patterns.
//!
//! The tokenizer walks the raw pattern bytes once, decoding one UTF-8 rune at
//! a time with a single rune of lookahead. It never backtracks, so the
//! token stream is finite and cannot be restarted.

use super::error::CompileError;
use super::token::{Position, Token, TokenKind};

/// Lazy token stream over a pattern source
pub struct Tokenizer<'a> {
    src: &'a [u8],
    /// Byte offset of the next undecoded rune
    cursor: usize,
    /// Rune offset from the start of the source
    offset: usize,
    /// Zero-based line counter
    line: usize,
    /// Rune offset of the first rune on the current line
    line_head: usize,
    /// Set by `:`; the next token is a regex body read up to `}`
    expect_regex: bool,
    /// Decoded lookahead rune and its width in bytes
    buf: Option<(char, usize)>,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            cursor: 0,
            offset: 0,
            line: 0,
            line_head: 0,
            expect_regex: false,
            buf: None,
        }
    }

    /// Produce the next token
    ///
    /// End of input is reported as a [`TokenKind::Eof`] token, never as an
    /// error. Errors are limited to undecodable UTF-8.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_whitespace()?;

        let position = self.position();
        let regex_body = std::mem::take(&mut self.expect_regex);

        let Some(c) = self.peek()? else {
            return Ok(Token::new(TokenKind::Eof, "", position));
        };

        let token = match c {
            '}' => {
                self.advance();
                Token::new(TokenKind::CloseBrace, "}", position)
            }
            _ if regex_body => Token::new(TokenKind::Literal, self.literal(true)?, position),
            '{' => {
                self.advance();
                Token::new(TokenKind::OpenBrace, "{", position)
            }
            ':' => {
                self.advance();
                self.expect_regex = true;
                Token::new(TokenKind::Colon, ":", position)
            }
            _ => Token::new(TokenKind::Literal, self.literal(false)?, position),
        };
        Ok(token)
    }

    /// Current position (1-indexed) of the lookahead rune
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            line: self.line + 1,
            column: self.offset - self.line_head + 1,
        }
    }

    fn peek(&mut self) -> Result<Option<char>, CompileError> {
        if let Some((c, _)) = self.buf {
            return Ok(Some(c));
        }

        let rest = &self.src[self.cursor..];
        let Some(&lead) = rest.first() else {
            return Ok(None);
        };

        let width = rune_width(lead);
        let decoded = rest
            .get(..width)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|s| s.chars().next());

        match decoded {
            Some(c) => {
                self.buf = Some((c, width));
                Ok(Some(c))
            }
            None => Err(CompileError::lex(self.position(), lead)),
        }
    }

    fn advance(&mut self) {
        let Some((c, width)) = self.buf.take() else {
            return;
        };
        self.cursor += width;
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.line_head = self.offset;
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), CompileError> {
        while let Some(c) = self.peek()? {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
        Ok(())
    }

    fn literal(&mut self, regex_body: bool) -> Result<String, CompileError> {
        let mut out = String::new();
        while let Some(c) = self.peek()? {
            let stop = if regex_body {
                c == '}'
            } else {
                matches!(c, '{' | '}' | ':')
            };
            if stop {
                break;
            }
            out.push(c);
            self.advance();
        }
        Ok(out)
    }
}

/// Byte length of a UTF-8 sequence from its lead byte; 0 for an invalid lead
fn rune_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
