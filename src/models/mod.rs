//! Data models module
//!
//! This module contains the records exchanged with the backend REST API

pub mod event;
pub mod startup;
pub mod admin;

// Re-export commonly used models
pub use event::{Event, NewEvent, Registration, EventRegistrationRequest};
pub use startup::{StartupApplication, StartupSummary};
pub use admin::{AdminAccount, NewAdmin};
