//! Authentication service implementation
//!
//! Holds the process-wide session ("who is logged in and with what role")
//! and resolves login roles from the configured admin identities.
//! Credential verification belongs to the backend and is not done here.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;
use crate::config::AuthConfig;
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_auth_event;

/// Role carried by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Admin,
    Startup,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::Startup => "startup",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current user's authentication and role state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub role: Role,
    pub identity: String,
}

impl Session {
    /// The unauthenticated default
    pub fn guest() -> Self {
        Self {
            authenticated: false,
            role: Role::Guest,
            identity: String::new(),
        }
    }

    pub fn authenticated(identity: impl Into<String>, role: Role) -> Self {
        Self {
            authenticated: true,
            role,
            identity: identity.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && self.role == Role::Admin
    }

    pub fn is_startup(&self) -> bool {
        self.authenticated && self.role == Role::Startup
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::guest()
    }
}

/// Source of the current session snapshot.
///
/// Views and the route guard depend on this rather than on [`AuthContext`]
/// so a fixed session can stand in for tests.
pub trait SessionProvider {
    fn session(&self) -> Session;
}

impl SessionProvider for Session {
    fn session(&self) -> Session {
        self.clone()
    }
}

/// Process-wide session holder with change notification.
///
/// Cloning shares the same session.
#[derive(Debug, Clone)]
pub struct AuthContext {
    sender: Arc<watch::Sender<Session>>,
}

impl AuthContext {
    /// Create a context holding a guest session
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Session::guest());
        Self { sender: Arc::new(sender) }
    }

    /// Mark the session authenticated with the given identity and role
    pub fn login(&self, identity: &str, role: Role) -> Result<()> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(PortalError::Authentication("Identity is required".to_string()));
        }
        if role == Role::Guest {
            return Err(PortalError::Authentication("Cannot log in with the guest role".to_string()));
        }

        self.sender.send_replace(Session::authenticated(identity, role));
        log_auth_event(identity, "login", Some(role.as_str()));
        Ok(())
    }

    /// Reset to the unauthenticated default
    pub fn logout(&self) {
        let previous = self.sender.send_replace(Session::guest());
        if previous.authenticated {
            log_auth_event(&previous.identity, "logout", None);
        } else {
            debug!("Logout requested without an active session");
        }
    }

    /// Receiver notified on every login/logout; dependent views re-render from it
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.sender.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().authenticated
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for AuthContext {
    fn session(&self) -> Session {
        self.sender.borrow().clone()
    }
}

/// Resolves roles for logging-in identities
#[derive(Debug, Clone)]
pub struct AuthService {
    admin_identities: HashSet<String>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: &AuthConfig) -> Self {
        let admin_identities = config
            .admin_identities
            .iter()
            .map(|id| id.trim().to_lowercase())
            .collect();

        Self { admin_identities }
    }

    /// Check if an identity is a configured admin
    pub fn is_admin_identity(&self, identity: &str) -> bool {
        self.admin_identities.contains(&identity.trim().to_lowercase())
    }

    /// Role granted to an identity on login
    pub fn role_for(&self, identity: &str) -> Role {
        if self.is_admin_identity(identity) {
            Role::Admin
        } else {
            Role::Startup
        }
    }
}
