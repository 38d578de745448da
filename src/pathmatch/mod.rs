//! # Path Pattern Module
//!
//! Compiles route patterns such as `/foo/bar/{id}/view` or
//! `/foo/bar/{id:^[0-9]+}/view` into a [`Matcher`] that extracts named
//! captures from request paths.
//!
//! ## Pipeline
//!
//! 1. **Tokenizer**: the pattern is lexed into literal runs, braces and
//!    colons, each tagged with a 1-indexed line/column [`Position`].
//! 2. **Parser**: tokens are assembled into an ordered list of [`Segment`]s.
//! 3. **Compiler**: each segment becomes a consumer; embedded regular
//!    expressions are compiled here, once.
//! 4. **Matching**: consumers run left to right against the path, each
//!    eating a prefix of what is left.
//!
//! ## Capture forms
//!
//! - `{name}` captures one path segment: everything up to the next `/`.
//!   `/foo/bar/{id}` matches `/foo/bar/123` but not `/foo/bar/123/`.
//! - `{name:regex}` searches the rest of the path for `regex` and captures
//!   from the cursor to the end of the path component the match ends in.
//!   Slashes inside the match are kept:
//!   - `/foo/bar/{id:^[0-9]+}` matches `/foo/bar/123abc` but not `/foo/bar/abc123`
//!   - `/foo/bar/{id:[0-9]+$}` matches `/foo/bar/abc123` but not `/foo/bar/123abc`
//!   - `/foo/bar/{rest:.*$}` matches anything under `/foo/bar/`
//!
//! Paths are matched as given; no normalization or percent-decoding is done.

mod error;
mod matcher;
mod parser;
mod token;
mod tokenizer;

pub use error::{CompileError, CompileErrorKind, MatchError};
pub use matcher::{compile, compile_bytes, Matcher, Values};
pub use parser::{parse, Segment};
pub use token::{Position, Token, TokenKind};
pub use tokenizer::Tokenizer;
