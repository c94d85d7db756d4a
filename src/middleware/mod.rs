//! Middleware module
//!
//! This module contains the checks applied before a view renders

pub mod guard;

// Re-export commonly used middleware
pub use guard::{GuardDecision, RouteGuard};
