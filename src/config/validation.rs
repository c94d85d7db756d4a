//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{PortalError, Result};
use crate::utils::helpers::is_valid_email;
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_auth_config(&settings.auth)?;
    validate_registration_config(&settings.registration)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(PortalError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| PortalError::Config(format!("Invalid API base URL {}: {}", config.base_url, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(PortalError::Config(
            format!("API base URL must use http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(PortalError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate admin identities
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if let Some(bad) = config.admin_identities.iter().find(|id| !is_valid_email(id)) {
        return Err(PortalError::Config(
            format!("Admin identity is not an email address: {}", bad)
        ));
    }

    Ok(())
}

/// Validate registration form configuration
fn validate_registration_config(config: &super::RegistrationConfig) -> Result<()> {
    if config.placeholder_password.is_empty() {
        return Err(PortalError::Config(
            "Registration placeholder password is required".to_string()
        ));
    }

    if config.team_size_max == 0 {
        return Err(PortalError::Config(
            "Team size maximum must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortalError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortalError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
