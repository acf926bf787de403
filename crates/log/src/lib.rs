//! # strata-log
//!
//! Env-configured structured logger with error normalization.
//!
//! Every call builds a [`Record`] holding `level` and `message`, runs it
//! through a formatter chain and writes one rendered line:
//!
//! ```text
//! errors → [colorize] → timestamp → json | simple → stdout
//! ```
//!
//! The error stage flattens error arguments into collision-free `error`,
//! `errorResponse` and `errorRequest` fields (`error0`, `error1`, ... when
//! a key is taken).
//!
//! ## Quick start
//!
//! ```no_run
//! use serde_json::json;
//! use strata_log::{Arg, HttpError, ErrorResponse};
//!
//! # fn main() -> strata_log::LogResult<()> {
//! // LOG_LEVEL, LOG_FORMAT, LOG_SILENT, LOG_COLORS
//! let log = strata_log::from_env()?;
//!
//! log.info("server started", &[Arg::from(json!({"port": 8080}))]);
//!
//! let err = HttpError::new("upstream failed")
//!     .with_response(ErrorResponse::new(502, r#"{"reason":"bad gateway"}"#));
//! log.error("request failed", &[Arg::from(err)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## tracing
//!
//! [`init`] installs the same pipeline as the global `tracing` subscriber:
//!
//! ```no_run
//! let _guard = strata_log::init()?;
//! strata_log::info!(user = "ada", "login");
//! # Ok::<(), strata_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

// Core modules
mod builder;
mod config;
mod core;
mod diagnostic;
pub mod format;
pub mod layer;
mod logger;
mod macros;
mod record;
mod utils;
mod writer;

// Standard library
use std::sync::Arc;

// External dependencies
use tracing_subscriber::Layer as _;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{
    Config, Format, LOG_COLORS, LOG_FORMAT, LOG_LEVEL, LOG_SILENT, Level, WriterConfig, is_truthy,
};
pub use crate::core::{LogError, LogResult};
pub use diagnostic::{EnrichedError, ErrorResponse, HttpError, render_trace};
pub use logger::Logger;
pub use record::{Arg, LEVEL_KEY, MESSAGE_KEY, Record};
pub use utils::maybe_json;

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Assemble a logger from the process environment
///
/// # Errors
///
/// Returns [`LogError::Level`] if `LOG_LEVEL` names an unknown level; no
/// logger is built in that case.
pub fn from_env() -> LogResult<Logger> {
    LoggerBuilder::from_config(Config::from_env()).build()
}

/// Install the environment-configured logger as the global `tracing` subscriber
///
/// # Errors
///
/// Returns error if the configuration is invalid or a global subscriber is
/// already set.
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Install a logger built from `config` as the global `tracing` subscriber
///
/// # Errors
///
/// Returns error if the configuration is invalid or a global subscriber is
/// already set.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    let logger = Arc::new(LoggerBuilder::from_config(config).build()?);
    let filter = logger.level_filter();

    Registry::default()
        .with(layer::PipelineLayer::new(Arc::clone(&logger)).with_filter(filter))
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))?;

    Ok(LoggerGuard::new(logger))
}
