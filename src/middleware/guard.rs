//! Route guard
//!
//! Decides whether a protected view may render for the current session.
//! Evaluation is synchronous and only reads a session snapshot.

use std::collections::HashSet;
use tracing::{debug, warn};
use crate::services::auth::{Role, Session, SessionProvider};

/// Outcome of evaluating a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
    RedirectHome,
}

impl GuardDecision {
    pub fn is_allowed(self) -> bool {
        self == GuardDecision::Render
    }
}

/// Authorization check wrapping a protected view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGuard {
    required_roles: HashSet<Role>,
}

impl RouteGuard {
    /// Guard that only requires an authenticated session
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Guard requiring one of the given roles
    pub fn require(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            required_roles: roles.into_iter().collect(),
        }
    }

    pub fn required_roles(&self) -> &HashSet<Role> {
        &self.required_roles
    }

    /// Evaluate against the provider's current session
    pub fn evaluate(&self, provider: &impl SessionProvider) -> GuardDecision {
        self.check(&provider.session())
    }

    /// Evaluate against a session snapshot
    pub fn check(&self, session: &Session) -> GuardDecision {
        if !session.authenticated {
            warn!(required = ?self.required_roles, "Unauthenticated access to protected view");
            return GuardDecision::RedirectToLogin;
        }

        if !self.required_roles.is_empty() && !self.required_roles.contains(&session.role) {
            warn!(
                identity = %session.identity,
                role = %session.role,
                required = ?self.required_roles,
                "Role not permitted for protected view"
            );
            return GuardDecision::RedirectHome;
        }

        debug!(identity = %session.identity, role = %session.role, "Guard passed");
        GuardDecision::Render
    }
}
