use std::fmt;

use thiserror::Error;

use super::token::{Position, Token};

/// Stage of pattern compilation that rejected the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileErrorKind {
    /// The pattern bytes could not be decoded as UTF-8
    Lex,
    /// Unbalanced braces, a missing capture name, or an unexpected token
    Syntax,
    /// An embedded `{name:regex}` body failed to compile
    RegexCompile,
}

impl fmt::Display for CompileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileErrorKind::Lex => f.write_str("lex"),
            CompileErrorKind::Syntax => f.write_str("parse"),
            CompileErrorKind::RegexCompile => f.write_str("regex"),
        }
    }
}

/// Error returned when a path pattern cannot be turned into a [`Matcher`](super::Matcher)
///
/// Carries the position of the offending token and the literal text that was
/// being scanned when the error was raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error: {position}: {literal:?}: {message}")]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub position: Position,
    pub literal: String,
    pub message: String,
}

impl CompileError {
    pub(crate) fn lex(position: Position, byte: u8) -> Self {
        Self {
            kind: CompileErrorKind::Lex,
            position,
            literal: format!("\\x{byte:02x}"),
            message: "invalid UTF-8 sequence".to_string(),
        }
    }

    pub(crate) fn syntax(token: &Token, message: impl Into<String>) -> Self {
        Self {
            kind: CompileErrorKind::Syntax,
            position: token.position,
            literal: token.literal.clone(),
            message: message.into(),
        }
    }

    pub(crate) fn regex(
        position: Position,
        name: &str,
        pattern: &str,
        err: &regex::Error,
    ) -> Self {
        Self {
            kind: CompileErrorKind::RegexCompile,
            position,
            literal: pattern.to_string(),
            message: format!("failed to compile pattern for {name:?}: {err}"),
        }
    }
}

/// Reason a compiled pattern rejected a path
///
/// These are expected, non-fatal outcomes: a route table treats any of them
/// as "this route does not match, try the next one".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("failed to match input: failed to match literal pattern {literal:?}")]
    LiteralMismatch { literal: String },
    #[error("failed to match input: failed to match segment {name:?}")]
    SegmentMismatch { name: String },
    #[error("failed to match input: failed to match pattern {name:?}")]
    RegexMismatch { name: String },
    #[error("failed to match input (trailing input {remaining:?})")]
    TrailingInput { remaining: String },
}
