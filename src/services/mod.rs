//! Services module
//!
//! This module contains the backend client and session services

pub mod api;
pub mod auth;

// Re-export commonly used services
pub use api::ApiClient;
pub use auth::{AuthContext, AuthService, Role, Session, SessionProvider};

use crate::config::settings::Settings;
use crate::router::Router;
use crate::state::RegistrationFlow;
use crate::utils::errors::Result;

/// Service factory for creating and sharing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub settings: Settings,
    pub api: ApiClient,
    pub auth_service: AuthService,
    pub auth: AuthContext,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;
        let auth_service = AuthService::new(&settings.auth);
        let auth = AuthContext::new();

        Ok(Self {
            settings,
            api,
            auth_service,
            auth,
        })
    }

    /// Router honouring the feature flags
    pub fn router(&self) -> Router {
        Router::new(&self.settings.features)
    }

    /// Fresh registration controller
    pub fn registration_flow(&self) -> RegistrationFlow {
        RegistrationFlow::new(&self.settings.registration)
    }
}
