//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for router dispatch behaviour.
//!
//! ## Environment Variables
//!
//! ### `PATHROUTER_SLOW_MATCH_US`
//!
//! Dispatches that take longer than this many microseconds are logged at
//! `WARN` with the route label and duration. Accepts values in:
//! - Decimal: `1000`
//! - Hexadecimal: `0x3e8`
//!
//! Default: `1000` (1 ms)
//!
//! ### `PATHROUTER_LOG_MATCHES`
//!
//! `true`/`false`. When `false`, successful matches are logged at `DEBUG`
//! instead of `INFO`.
//!
//! Default: `true`
//!
//! ## Usage
//!
//! ```rust
//! use pathrouter::runtime_config::RouterConfig;
//! use pathrouter::PathHandler;
//!
//! let config = RouterConfig::from_env();
//! let handler = PathHandler::with_config(config);
//! assert!(handler.is_empty());
//! ```

use std::env;
use std::time::Duration;

/// Default slow-dispatch threshold in microseconds.
pub const DEFAULT_SLOW_MATCH_US: u64 = 1_000;

/// Router configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Dispatch duration above which a warning is logged
    pub slow_match_threshold: Duration,
    /// Log successful matches at INFO (otherwise DEBUG)
    pub log_matches: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
            log_matches: true,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let slow_match_us = env::var("PATHROUTER_SLOW_MATCH_US")
            .ok()
            .and_then(|val| parse_micros(&val))
            .unwrap_or(DEFAULT_SLOW_MATCH_US);
        let log_matches = env::var("PATHROUTER_LOG_MATCHES")
            .ok()
            .and_then(|val| val.trim().parse().ok())
            .unwrap_or(true);
        RouterConfig {
            slow_match_threshold: Duration::from_micros(slow_match_us),
            log_matches,
        }
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal microsecond count.
fn parse_micros(val: &str) -> Option<u64> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
