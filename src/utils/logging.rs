//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the IncubatorHub application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{PortalError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held by the caller.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = if config.directory.is_empty() {
        (None, None)
    } else {
        let file_appender = tracing_appender::rolling::daily(&config.directory, "incubatorhub.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking);
        (Some(layer), Some(guard))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PortalError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a route resolution
pub fn log_navigation(path: &str, resolved: &str, redirected: bool) {
    if redirected {
        warn!(path = path, target = resolved, "Navigation redirected by guard");
    } else {
        debug!(path = path, page = resolved, "Navigation resolved");
    }
}

/// Log login/logout transitions
pub fn log_auth_event(identity: &str, event: &str, role: Option<&str>) {
    info!(
        identity = identity,
        event = event,
        role = role,
        "Session changed"
    );
}

/// Log a registration form step transition
pub fn log_form_step(from: u8, to: u8, error_count: usize) {
    if error_count > 0 {
        debug!(from = from, to = to, errors = error_count, "Form step blocked by validation");
    } else {
        debug!(from = from, to = to, "Form step changed");
    }
}

/// Log the outcome of a registration submission attempt
pub fn log_submission(submission_id: &str, success: bool, details: Option<&str>) {
    if success {
        info!(submission_id = submission_id, "Registration submitted");
    } else {
        warn!(submission_id = submission_id, details = details, "Registration submission failed");
    }
}

/// Log admin actions
pub fn log_admin_action(admin: &str, action: &str, target: Option<&str>) {
    warn!(
        admin = admin,
        action = action,
        target = target,
        "Admin action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}
