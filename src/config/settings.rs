//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub registration: RegistrationConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Backend REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Login role resolution
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Identities that receive the admin role on login
    pub admin_identities: Vec<String>,
}

/// Startup registration form configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    pub placeholder_password: String,
    pub team_size_max: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the rolling log file; empty disables file output
    pub directory: String,
    pub json: bool,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub admin_dashboard: bool,
    pub startup_dashboard: bool,
}

impl Settings {
    /// Load settings from `config.*` in the working directory and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit file, still honouring environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build(file: config::File<config::FileSourceFile, config::FileFormat>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("INCUBATORHUB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PortalError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
            registration: RegistrationConfig::default(),
            logging: LoggingConfig::default(),
            features: FeaturesConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
            user_agent: format!("IncubatorHub/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            placeholder_password: "changeme".to_string(),
            team_size_max: 1000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: String::new(),
            json: false,
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            admin_dashboard: true,
            startup_dashboard: true,
        }
    }
}
