//! Login view

use crate::router::Route;
use crate::services::auth::{AuthContext, AuthService};
use crate::utils::errors::{FieldErrors, PortalError, Result};
use crate::utils::helpers::is_valid_email;

/// Credentials typed into the login page.
///
/// The password is only checked for presence; verifying it is the
/// authentication backend's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Invalid email format");
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors
    }

    /// Log in and return the landing page for the granted role
    pub fn submit(&self, auth: &AuthContext, service: &AuthService) -> Result<Route> {
        self.validate().into_result()?;

        let identity = self.email.trim();
        let role = service.role_for(identity);
        auth.login(identity, role)?;

        Route::dashboard_for(role)
            .ok_or_else(|| PortalError::Authentication(format!("No landing page for role {}", role)))
    }
}
