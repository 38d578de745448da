//! Compiled pattern and the consumer-chain matching engine.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use super::error::{CompileError, MatchError};
use super::parser::{parse, Segment};

/// Named captures extracted by a successful match
///
/// A later capture with the same name overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Values(HashMap<String, String>);

impl Values {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured value for `name`, or `""` when nothing was captured under it
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map_or("", String::as_str)
    }

    /// Captured value for `name`, distinguishing "absent" from "empty"
    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

/// Executable form of a [`Segment`]
#[derive(Debug, Clone)]
enum Consumer {
    Literal(String),
    Segment(String),
    Regex { name: String, pattern: Regex },
}

impl Consumer {
    fn compile(segment: Segment) -> Result<Self, CompileError> {
        match segment {
            Segment::Literal { text } => Ok(Consumer::Literal(text)),
            Segment::Named { name } => Ok(Consumer::Segment(name)),
            Segment::NamedRegex {
                name,
                pattern,
                position,
            } => match Regex::new(&pattern) {
                Ok(compiled) => Ok(Consumer::Regex {
                    name,
                    pattern: compiled,
                }),
                Err(err) => Err(CompileError::regex(position, &name, &pattern, &err)),
            },
        }
    }

    /// Consume a prefix of `s`, recording any capture into `values`
    ///
    /// Returns the unconsumed remainder.
    fn consume<'s>(&self, s: &'s str, values: &mut Values) -> Result<&'s str, MatchError> {
        match self {
            Consumer::Literal(text) => {
                s.strip_prefix(text.as_str())
                    .ok_or_else(|| MatchError::LiteralMismatch {
                        literal: text.clone(),
                    })
            }
            Consumer::Segment(name) => {
                let (value, rest) = match s.find('/') {
                    Some(i) => s.split_at(i),
                    None if !s.is_empty() => (s, ""),
                    None => return Err(MatchError::SegmentMismatch { name: name.clone() }),
                };
                values.insert(name, value);
                Ok(rest)
            }
            Consumer::Regex { name, pattern } => {
                let found = pattern
                    .find(s)
                    .ok_or_else(|| MatchError::RegexMismatch { name: name.clone() })?;

                // The capture covers everything up to the end of the path
                // component the match ends in, not just the regex match.
                let end = found.end();
                let (value, rest) = match s[end..].find('/') {
                    Some(i) => s.split_at(end + i),
                    None => (s, ""),
                };
                values.insert(name, value);
                Ok(rest)
            }
        }
    }

    fn capture_name(&self) -> Option<&str> {
        match self {
            Consumer::Literal(_) => None,
            Consumer::Segment(name) | Consumer::Regex { name, .. } => Some(name),
        }
    }
}

/// Compiled path pattern
///
/// Built once from a pattern such as `/users/{id}` or `/files/{rest:.*$}`
/// and reused for every incoming path. A `Matcher` holds no per-call state,
/// so it can be shared across threads and matched concurrently.
///
/// # Example
///
/// ```rust
/// use pathmux::pathmatch::compile;
///
/// let matcher = compile("/foo/bar/baz/{id:^[0-9]+}/view").unwrap();
/// let values = matcher.match_path("/foo/bar/baz/0123456/view").unwrap();
/// assert_eq!(values.get("id"), "0123456");
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    consumers: Vec<Consumer>,
}

impl Matcher {
    /// Compile a pattern string
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Self::from_bytes(pattern.as_bytes())
    }

    /// Compile a pattern from raw bytes
    ///
    /// Unlike [`Matcher::new`], the input may contain invalid UTF-8, which is
    /// reported as a [`CompileErrorKind::Lex`](super::CompileErrorKind::Lex) error.
    pub fn from_bytes(src: &[u8]) -> Result<Self, CompileError> {
        let segments = parse(src)?;
        let consumers = segments
            .into_iter()
            .map(Consumer::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let pattern = String::from_utf8_lossy(src).into_owned();
        debug!(
            pattern = %pattern,
            consumers = consumers.len(),
            captures = ?consumers.iter().filter_map(Consumer::capture_name).collect::<Vec<_>>(),
            "Path pattern compiled"
        );

        Ok(Self { pattern, consumers })
    }

    /// Source text this matcher was compiled from
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Names captured by this pattern, in pattern order (duplicates included)
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.consumers.iter().filter_map(Consumer::capture_name)
    }

    /// Match `path` against the pattern, returning the captured values
    ///
    /// Consumers run left to right over a shrinking cursor. Once the cursor
    /// is empty the remaining consumers are skipped, except that a `{name}`
    /// segment coming next still runs and fails with
    /// [`MatchError::SegmentMismatch`], so `/a/{id}` rejects `/a/`. Any input
    /// left over after the chain is a [`MatchError::TrailingInput`].
    pub fn match_path(&self, path: &str) -> Result<Values, MatchError> {
        let mut values = Values::new();
        let mut rest = path;

        for (i, consumer) in self.consumers.iter().enumerate() {
            if i > 0 && rest.is_empty() && !matches!(consumer, Consumer::Segment(_)) {
                break;
            }
            rest = consumer.consume(rest, &mut values).map_err(|err| {
                trace!(pattern = %self.pattern, path = %path, error = %err, "Path mismatch");
                err
            })?;
        }

        if !rest.is_empty() {
            trace!(pattern = %self.pattern, path = %path, remaining = %rest, "Trailing input");
            return Err(MatchError::TrailingInput {
                remaining: rest.to_string(),
            });
        }

        trace!(pattern = %self.pattern, path = %path, values = ?values, "Path matched");
        Ok(values)
    }
}

impl FromStr for Matcher {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Compile a pattern string into a [`Matcher`]
pub fn compile(pattern: &str) -> Result<Matcher, CompileError> {
    Matcher::new(pattern)
}

/// Compile a pattern from raw bytes into a [`Matcher`]
pub fn compile_bytes(pattern: &[u8]) -> Result<Matcher, CompileError> {
    Matcher::from_bytes(pattern)
}
