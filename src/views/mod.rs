//! Views module
//!
//! Page-level state for the login page, the public events page and the
//! admin dashboard, built on the shared resource list protocol.

pub mod resource;
pub mod admin;
pub mod events;
pub mod login;

pub use resource::{
    AdminCollection, EventCollection, MutableCollection, RegistrationCollection, RemoteCollection, ResourceList,
    StartupCollection,
};
pub use admin::{AdminDashboard, AdminSection, SelectedEvent};
pub use events::{EventRegistrationForm, EventsPage};
pub use login::LoginForm;
