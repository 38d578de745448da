//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the route table.
//!
//! ## Environment Variables
//!
//! ### `PATHMUX_SLOW_MATCH_US`
//!
//! Route lookups that take longer than this many microseconds are logged at
//! `WARN` instead of `INFO`. Accepts values in:
//! - Decimal: `1000`
//! - Hexadecimal: `0x3e8`
//!
//! Default: `1000` (1 ms)
//!
//! ## Usage
//!
//! ```rust
//! use pathmux::runtime_config::RuntimeConfig;
//! use pathmux::router::Router;
//!
//! let config = RuntimeConfig::from_env();
//! let router: Router<&'static str> = Router::with_config(config);
//! ```

use std::env;
use std::time::Duration;

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Lookup duration above which a route match is reported as slow
    pub slow_match_threshold: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let micros = env::var("PATHMUX_SLOW_MATCH_US")
            .ok()
            .and_then(|val| parse_micros(&val))
            .unwrap_or(DEFAULT_SLOW_MATCH_US);
        RuntimeConfig {
            slow_match_threshold: Duration::from_micros(micros),
        }
    }
}

fn parse_micros(val: &str) -> Option<u64> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_micros() {
        assert_eq!(parse_micros("250"), Some(250));
        assert_eq!(parse_micros("0x3e8"), Some(1000));
        assert_eq!(parse_micros(" 42 "), Some(42));
        assert_eq!(parse_micros("fast"), None);
        assert_eq!(parse_micros("0xzz"), None);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(
            RuntimeConfig::default().slow_match_threshold,
            Duration::from_millis(1)
        );
    }
}
