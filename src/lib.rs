//! # pathmux
//!
//! **pathmux** compiles URL path patterns such as `/foo/bar/{id}/view` or
//! `/foo/bar/{id:^[0-9]+}/view` into reusable matchers that extract named
//! captures from request paths, and provides a method-aware route table
//! built on top of them.
//!
//! ## Architecture
//!
//! - **[`pathmatch`]** - Tokenizer, parser, compiler and matching engine for path patterns
//! - **[`router`]** - Ordered `(method, pattern, handler)` table with first-match lookup
//! - **[`runtime_config`]** - Environment-driven router settings
//! - **[`otel`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - The `pathmux` command-line explorer
//!
//! ### Compilation and Matching Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Tok as Tokenizer
//!     participant Parser
//!     participant Matcher
//!
//!     Caller->>Parser: compile("/users/{id}")
//!     Parser->>Tok: next_token()
//!     Tok-->>Parser: Literal "/users/" @1:1
//!     Tok-->>Parser: "{" "id" "}" ... Eof
//!     Parser-->>Matcher: [Literal, Named(id)]
//!     Matcher-->>Caller: Matcher
//!
//!     Caller->>Matcher: match_path("/users/42")
//!     Matcher->>Matcher: Literal consumes "/users/"
//!     Matcher->>Matcher: Segment captures id = "42"
//!     Matcher-->>Caller: Values { id: "42" }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pathmux::compile;
//!
//! let matcher = compile("/foo/bar/baz/{id:.*$}").unwrap();
//! let values = matcher.match_path("/foo/bar/baz/abc123/hello/world").unwrap();
//! assert_eq!(values.get("id"), "abc123/hello/world");
//! ```
//!
//! ## Error Handling
//!
//! Malformed patterns fail at compile time with a [`CompileError`] carrying
//! the line and column of the offending token. Paths that do not fit a
//! pattern yield a [`MatchError`], which a route table treats as "try the
//! next route". Matching never panics on malformed input paths.

pub mod cli;
pub mod otel;
pub mod pathmatch;
pub mod router;
pub mod runtime_config;

pub use pathmatch::{compile, compile_bytes, CompileError, CompileErrorKind, MatchError, Matcher, Values};
pub use router::{RouteMatch, Router};
