//! Recursive-descent parser for path patterns.
//!
//! Grammar (LL(1)):
//!
//! ```text
//! pattern := segment*
//! segment := LITERAL | '{' NAME ( ':' REGEXTEXT )? '}'
//! ```
//!
//! Every token is consumed exactly once; the first error aborts the parse
//! and is returned to the caller.

use serde::Serialize;

use super::error::CompileError;
use super::token::{Position, Token, TokenKind};
use super::tokenizer::Tokenizer;

/// Parsed form of a single pattern segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Fixed text matched verbatim
    Literal { text: String },
    /// `{name}`: one slash-free path segment
    Named { name: String },
    /// `{name:regex}`: regex match extended to the next `/`
    NamedRegex {
        name: String,
        pattern: String,
        /// Position of the regex body in the pattern source
        position: Position,
    },
}

/// Parse a pattern source into its ordered segment list
pub fn parse(src: &[u8]) -> Result<Vec<Segment>, CompileError> {
    Parser::new(src).pattern()
}

struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a [u8]) -> Self {
        Self {
            tokenizer: Tokenizer::new(src),
        }
    }

    fn pattern(&mut self) -> Result<Vec<Segment>, CompileError> {
        let mut segments = Vec::new();
        loop {
            let token = self.tokenizer.next_token()?;
            match token.kind {
                TokenKind::Eof => return Ok(segments),
                TokenKind::Literal => segments.push(Segment::Literal {
                    text: token.literal,
                }),
                TokenKind::OpenBrace => segments.push(self.capture()?),
                TokenKind::CloseBrace => {
                    return Err(CompileError::syntax(&token, "unbalanced '}'"));
                }
                TokenKind::Colon => {
                    return Err(CompileError::syntax(&token, "unexpected ':' outside of a capture"));
                }
            }
        }
    }

    /// Everything after an opening `{`
    fn capture(&mut self) -> Result<Segment, CompileError> {
        let name = self.expect_literal("expected capture name")?;

        let token = self.tokenizer.next_token()?;
        match token.kind {
            TokenKind::CloseBrace => Ok(Segment::Named {
                name: name.literal,
            }),
            TokenKind::Colon => {
                let body = self.expect_literal("expected pattern after ':'")?;
                self.expect_close()?;
                Ok(Segment::NamedRegex {
                    name: name.literal,
                    pattern: body.literal,
                    position: body.position,
                })
            }
            TokenKind::Eof => Err(CompileError::syntax(&token, "unterminated capture, expected '}'")),
            _ => Err(CompileError::syntax(&token, "expected '}' or ':'")),
        }
    }

    fn expect_literal(&mut self, message: &str) -> Result<Token, CompileError> {
        let token = self.tokenizer.next_token()?;
        if token.kind == TokenKind::Literal {
            Ok(token)
        } else {
            Err(CompileError::syntax(&token, message))
        }
    }

    fn expect_close(&mut self) -> Result<(), CompileError> {
        let token = self.tokenizer.next_token()?;
        match token.kind {
            TokenKind::CloseBrace => Ok(()),
            TokenKind::Eof => Err(CompileError::syntax(&token, "unterminated capture, expected '}'")),
            _ => Err(CompileError::syntax(&token, "expected '}'")),
        }
    }
}
