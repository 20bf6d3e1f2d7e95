//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output on stderr
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use textscrub::logging::init_logging;
//! use textscrub::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of an anonymization run
///
/// # Example
///
/// ```no_run
/// use textscrub::log_scrub_start;
///
/// log_scrub_start!(120, 1);
/// ```
#[macro_export]
macro_rules! log_scrub_start {
    ($examples:expr, $scrubbers:expr) => {
        tracing::info!(
            examples = $examples,
            scrubbers = $scrubbers,
            "Starting anonymization"
        );
    };
}

/// Log the completion of an anonymization run
///
/// # Example
///
/// ```no_run
/// use textscrub::log_scrub_complete;
/// use std::time::Duration;
///
/// log_scrub_complete!(120, 37, Duration::from_millis(850));
/// ```
#[macro_export]
macro_rules! log_scrub_complete {
    ($examples:expr, $replacements:expr, $duration:expr) => {
        tracing::info!(
            examples = $examples,
            replacements = $replacements,
            duration_ms = $duration.as_millis() as u64,
            "Anonymization completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use textscrub::log_error_with_context;
/// use textscrub::domain::ScrubError;
///
/// let error = ScrubError::Configuration("Unknown scrubber".to_string());
/// log_error_with_context!(&error, "Failed to build pipeline");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
