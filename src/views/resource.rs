//! Resource list views
//!
//! A [`ResourceList`] holds one backend collection. Reads replace the whole
//! list; writes are followed by a fresh read instead of patching local state.

use std::fmt;
use tracing::debug;
use crate::models::{AdminAccount, Event, NewAdmin, NewEvent, Registration, StartupSummary};
use crate::services::api::ApiClient;
use crate::utils::errors::Result;

/// A collection served by a fixed backend endpoint
#[allow(async_fn_in_trait)]
pub trait RemoteCollection {
    type Item: Clone + fmt::Debug;

    /// Plural name used in messages, e.g. "events"
    fn label(&self) -> &'static str;

    async fn fetch(&self, api: &ApiClient) -> Result<Vec<Self::Item>>;
}

/// A collection that also accepts create and delete writes
#[allow(async_fn_in_trait)]
pub trait MutableCollection: RemoteCollection {
    type Draft;

    /// Singular name used in messages, e.g. "event"
    fn noun(&self) -> &'static str;

    async fn create(&self, api: &ApiClient, draft: &Self::Draft) -> Result<()>;

    async fn remove(&self, api: &ApiClient, id: &str) -> Result<()>;
}

/// Local state of a list view
#[derive(Debug, Clone)]
pub struct ResourceList<C: RemoteCollection> {
    collection: C,
    items: Vec<C::Item>,
    error: Option<String>,
    loading: bool,
}

impl<C: RemoteCollection> ResourceList<C> {
    pub fn new(collection: C) -> Self {
        Self {
            collection,
            items: Vec::new(),
            error: None,
            loading: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_items(collection: C, items: Vec<C::Item>) -> Self {
        Self { items, ..Self::new(collection) }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    pub fn items(&self) -> &[C::Item] {
        &self.items
    }

    /// Visible error message, if the last action failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop items and error
    pub fn clear(&mut self) {
        self.items.clear();
        self.error = None;
    }

    /// Read the collection. On failure the list is emptied, never left stale.
    pub async fn load(&mut self, api: &ApiClient) -> Result<()> {
        self.loading = true;
        self.error = None;
        debug!(collection = self.collection.label(), "Loading collection");

        let result = self.collection.fetch(api).await;
        self.loading = false;

        match result {
            Ok(items) => {
                debug!(collection = self.collection.label(), count = items.len(), "Collection loaded");
                self.items = items;
                Ok(())
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(failure_message("fetch", self.collection.label()));
                Err(e)
            }
        }
    }
}

impl<C: MutableCollection> ResourceList<C> {
    /// Write a new entity, then reload
    pub async fn create(&mut self, api: &ApiClient, draft: &C::Draft) -> Result<()> {
        if let Err(e) = self.collection.create(api, draft).await {
            self.error = Some(failure_message("add", self.collection.noun()));
            return Err(e);
        }
        self.load(api).await
    }

    /// Delete an entity by id, then reload
    pub async fn remove(&mut self, api: &ApiClient, id: &str) -> Result<()> {
        self.delete(api, id).await?;
        self.load(api).await
    }

    /// Delete an entity by id without reloading; items are left as they are
    pub async fn delete(&mut self, api: &ApiClient, id: &str) -> Result<()> {
        if let Err(e) = self.collection.remove(api, id).await {
            self.error = Some(failure_message("delete", self.collection.noun()));
            return Err(e);
        }
        Ok(())
    }
}

fn failure_message(action: &str, what: &str) -> String {
    format!("Failed to {} {}. Please try again later.", action, what)
}

/// All events
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCollection;

impl RemoteCollection for EventCollection {
    type Item = Event;

    fn label(&self) -> &'static str {
        "events"
    }

    async fn fetch(&self, api: &ApiClient) -> Result<Vec<Event>> {
        api.get_events().await
    }
}

impl MutableCollection for EventCollection {
    type Draft = NewEvent;

    fn noun(&self) -> &'static str {
        "event"
    }

    async fn create(&self, api: &ApiClient, draft: &NewEvent) -> Result<()> {
        api.add_event(draft).await.map(|_| ())
    }

    async fn remove(&self, api: &ApiClient, id: &str) -> Result<()> {
        api.delete_event(id).await
    }
}

/// Registrations of one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCollection {
    pub event_id: String,
}

impl RemoteCollection for RegistrationCollection {
    type Item = Registration;

    fn label(&self) -> &'static str {
        "registrations"
    }

    async fn fetch(&self, api: &ApiClient) -> Result<Vec<Registration>> {
        api.get_registrations(&self.event_id).await
    }
}

/// Submitted startups
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupCollection;

impl RemoteCollection for StartupCollection {
    type Item = StartupSummary;

    fn label(&self) -> &'static str {
        "startups"
    }

    async fn fetch(&self, api: &ApiClient) -> Result<Vec<StartupSummary>> {
        api.get_startups().await
    }
}

/// Admin accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminCollection;

impl RemoteCollection for AdminCollection {
    type Item = AdminAccount;

    fn label(&self) -> &'static str {
        "admins"
    }

    async fn fetch(&self, api: &ApiClient) -> Result<Vec<AdminAccount>> {
        api.get_admins().await
    }
}

impl MutableCollection for AdminCollection {
    type Draft = NewAdmin;

    fn noun(&self) -> &'static str {
        "admin"
    }

    async fn create(&self, api: &ApiClient, draft: &NewAdmin) -> Result<()> {
        api.add_admin(draft).await
    }

    async fn remove(&self, api: &ApiClient, id: &str) -> Result<()> {
        api.delete_admin(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn unreachable_api() -> ApiClient {
        // port 9 (discard) is not listening in test environments
        ApiClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 2,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(failure_message("fetch", "events"), "Failed to fetch events. Please try again later.");
        assert_eq!(failure_message("add", "event"), "Failed to add event. Please try again later.");
    }

    #[tokio::test]
    async fn test_load_failure_empties_list() {
        let api = unreachable_api();
        let mut list = ResourceList::new(StartupCollection);
        list.items.push(StartupSummary {
            id: "1".to_string(),
            startup_name: "Stale".to_string(),
            industry: String::new(),
            current_stage: String::new(),
            city: String::new(),
        });

        assert!(list.load(&api).await.is_err());
        assert!(list.items().is_empty());
        assert_eq!(list.error(), Some("Failed to fetch startups. Please try again later."));
        assert!(!list.is_loading());
    }

    #[tokio::test]
    async fn test_failed_create_keeps_items() {
        let api = unreachable_api();
        let mut list = ResourceList::new(AdminCollection);
        list.items.push(AdminAccount { id: "7".to_string(), email: "admin@lce.org".to_string() });

        let draft = NewAdmin { email: "new@lce.org".to_string(), password: "secret".to_string() };
        assert!(list.create(&api, &draft).await.is_err());
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.error(), Some("Failed to add admin. Please try again later."));
    }
}
