//! Structured logging initialisation.
//!
//! pathrouter emits `tracing` events under the `pathrouter` target: route
//! registration, dispatch attempts, matches, misses and slow dispatches.
//! [`LogConfig`] filters that target separately from the host application, so
//! a service can keep its own logs at `info` while silencing per-dispatch
//! router noise (or the other way round while debugging a deep link).
//!
//! ## Environment Variables
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PATHROUTER_LOG_LEVEL` | `info` | level for every target |
//! | `PATHROUTER_LOG_ROUTER_LEVEL` | same as `PATHROUTER_LOG_LEVEL` | level for the `pathrouter` target |
//! | `PATHROUTER_LOG_FORMAT` | `json` | `json`, `pretty` or `compact` |
//! | `PATHROUTER_LOG_TARGET_FILTER` | unset | extra `EnvFilter` directives, comma-separated |
//! | `PATHROUTER_LOG_INCLUDE_LOCATION` | `false` | include file:line |
//! | `PATHROUTER_LOG_ASYNC` | `false` | write through a non-blocking stdout worker |
//!
//! `RUST_LOG`, when set, replaces the level and directive settings entirely.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::runtime_config::RouterConfig;

/// Target of every event this crate emits.
pub const ROUTER_TARGET: &str = "pathrouter";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// Lenient parse; anything unrecognised is JSON.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level for every target without a more specific directive
    pub level: Level,
    /// Level for the `pathrouter` target
    pub router_level: Level,
    pub format: LogFormat,
    /// Additional `EnvFilter` directives, applied last
    pub target_filter: Vec<String>,
    pub include_location: bool,
    /// Write through `tracing_appender::non_blocking`
    pub async_logging: bool,
}

impl LogConfig {
    /// Read the `PATHROUTER_LOG_*` variables. Unparseable values fall back to
    /// their defaults.
    pub fn from_env() -> Self {
        let level = env_parse("PATHROUTER_LOG_LEVEL").unwrap_or(Level::INFO);
        Self {
            level,
            router_level: env_parse("PATHROUTER_LOG_ROUTER_LEVEL").unwrap_or(level),
            format: env::var("PATHROUTER_LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or(LogFormat::Json),
            target_filter: env::var("PATHROUTER_LOG_TARGET_FILTER")
                .map(|raw| split_directives(&raw))
                .unwrap_or_default(),
            include_location: env_parse("PATHROUTER_LOG_INCLUDE_LOCATION").unwrap_or(false),
            async_logging: env_parse("PATHROUTER_LOG_ASYNC").unwrap_or(false),
        }
    }

    /// Verbose, human-readable output with every dispatch traced.
    pub fn default_dev() -> Self {
        Self {
            level: Level::DEBUG,
            router_level: Level::DEBUG,
            format: LogFormat::Pretty,
            target_filter: Vec::new(),
            include_location: true,
            async_logging: false,
        }
    }

    /// JSON output; the router only reports slow dispatches.
    pub fn default_prod() -> Self {
        Self {
            level: Level::INFO,
            router_level: Level::WARN,
            format: LogFormat::Json,
            target_filter: Vec::new(),
            include_location: false,
            async_logging: true,
        }
    }

    /// Router settings consistent with this configuration: successful
    /// matches are only logged at INFO when the router target lets INFO
    /// through.
    #[must_use]
    pub fn router_config(&self) -> RouterConfig {
        let mut config = RouterConfig::from_env();
        config.log_matches &= self.router_level >= Level::INFO;
        config
    }

    /// Build the filter: global level, then the router target, then
    /// `target_filter` in order.
    ///
    /// # Errors
    ///
    /// Fails on a directive `EnvFilter` cannot parse.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(from_env) = EnvFilter::try_from_default_env() {
            return Ok(from_env);
        }

        let router = format!(
            "{ROUTER_TARGET}={}",
            self.router_level.as_str().to_ascii_lowercase()
        );
        let mut filter =
            EnvFilter::default().add_directive(LevelFilter::from_level(self.level).into());
        for directive in std::iter::once(&router).chain(&self.target_filter) {
            let parsed = directive
                .parse::<Directive>()
                .with_context(|| format!("Invalid log filter directive `{directive}`"))?;
            filter = filter.add_directive(parsed);
        }
        Ok(filter)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}

fn split_directives(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(str::to_string)
        .collect()
}

fn fmt_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(writer);
    match config.format {
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

/// Initialize logging at `log_level` for every target, taking every other
/// setting from the environment.
///
/// # Example
///
/// ```no_run
/// pathrouter::logging::init_logging("debug").expect("Failed to initialize logging");
/// ```
///
/// # Errors
///
/// Fails on an unknown level name, an invalid directive, or if a global
/// subscriber is already installed.
pub fn init_logging(log_level: &str) -> Result<()> {
    let level = log_level
        .trim()
        .parse::<Level>()
        .with_context(|| format!("Unknown log level `{log_level}`"))?;
    let config = LogConfig {
        level,
        router_level: level,
        ..LogConfig::from_env()
    };
    init_logging_with_config(&config)
}

/// Initialize logging with an explicit configuration.
///
/// # Errors
///
/// Fails on an invalid directive or if a global subscriber is already
/// installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    if config.async_logging {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        registry
            .with(fmt_layer(config, writer))
            .try_init()
            .context("Failed to install non-blocking subscriber")?;
        // Dropping the guard stops the writer thread.
        std::mem::forget(guard);
    } else {
        registry
            .with(fmt_layer(config, std::io::stdout))
            .try_init()
            .context("Failed to install subscriber")?;
    }
    Ok(())
}
