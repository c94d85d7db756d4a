//! Public events page and event registration

use tracing::info;
use crate::models::{Event, EventRegistrationRequest};
use crate::services::api::ApiClient;
use crate::utils::errors::{FieldErrors, Result};
use crate::utils::helpers::{is_valid_email, is_valid_phone, matches_query};
use super::resource::{EventCollection, ResourceList};

/// Event list with a text search
#[derive(Debug, Clone)]
pub struct EventsPage {
    events: ResourceList<EventCollection>,
    query: String,
}

impl EventsPage {
    pub fn new() -> Self {
        Self {
            events: ResourceList::new(EventCollection),
            query: String::new(),
        }
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<()> {
        self.events.load(api).await
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn error(&self) -> Option<&str> {
        self.events.error()
    }

    pub fn is_loading(&self) -> bool {
        self.events.is_loading()
    }

    pub fn all(&self) -> &[Event] {
        self.events.items()
    }

    /// Events matching the search over name and description
    pub fn visible(&self) -> Vec<&Event> {
        self.events
            .items()
            .iter()
            .filter(|e| matches_query(&self.query, &[e.name.as_str(), e.description.as_str()]))
            .collect()
    }
}

impl Default for EventsPage {
    fn default() -> Self {
        Self::new()
    }
}

/// "Register Now" form for one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRegistrationForm {
    pub name: String,
    pub email: String,
    pub number: String,
}

impl EventRegistrationForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Invalid email format".to_string());
        }
        if !is_valid_phone(&self.number) {
            errors.insert("number", "Number must be 10 digits".to_string());
        }
        errors
    }

    /// Validate and send one registration request
    pub async fn submit(&self, api: &ApiClient, event_id: &str) -> Result<()> {
        self.validate().into_result()?;

        let request = EventRegistrationRequest {
            event_id: event_id.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            number: self.number.trim().to_string(),
        };
        api.register_for_event(&request).await?;
        info!(event_id = event_id, "Event registration sent");
        Ok(())
    }
}
