//! IncubatorHub
//!
//! Client core for the startup incubator website. This library provides the
//! session context and route guard, the page router, the multi-step startup
//! registration controller with its validation schemas, a JSON client for
//! the backend REST API, and the list views used by the admin dashboard.

#![allow(non_snake_case)]

pub mod config;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PortalError, Result};

// Re-export main components for easy access
pub use middleware::{GuardDecision, RouteGuard};
pub use router::{Navigation, Route, Router};
pub use services::{ApiClient, AuthContext, Role, ServiceFactory, Session, SessionProvider};
pub use state::{FlowState, RegistrationFlow, Step};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
