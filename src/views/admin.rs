//! Admin dashboard
//!
//! Sidebar sections over the backend collections. Every write goes through
//! a [`ResourceList`] so the affected list is re-read afterwards.

use tracing::{info, warn};
use crate::middleware::guard::{GuardDecision, RouteGuard};
use crate::models::{Event, NewAdmin, NewEvent};
use crate::router::Route;
use crate::services::api::ApiClient;
use crate::services::auth::{AuthContext, Role, SessionProvider};
use crate::utils::errors::{PortalError, Result};
use crate::utils::helpers::{is_valid_email, parse_event_date};
use crate::utils::logging::log_admin_action;
use super::resource::{
    AdminCollection, EventCollection, RegistrationCollection, ResourceList, StartupCollection,
};

/// Sidebar sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminSection {
    Events,
    Programs,
    Admins,
    Startups,
    Analytics,
}

impl AdminSection {
    pub const ALL: [AdminSection; 5] = [
        AdminSection::Events,
        AdminSection::Programs,
        AdminSection::Admins,
        AdminSection::Startups,
        AdminSection::Analytics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AdminSection::Events => "Events",
            AdminSection::Programs => "Programs",
            AdminSection::Admins => "Admins",
            AdminSection::Startups => "Startups",
            AdminSection::Analytics => "Analytics",
        }
    }
}

/// Registrations shown for one selected event
#[derive(Debug, Clone)]
pub struct SelectedEvent {
    pub event: Event,
    pub registrations: ResourceList<RegistrationCollection>,
}

#[derive(Debug, Clone)]
pub struct AdminDashboard {
    api: ApiClient,
    auth: AuthContext,
    section: AdminSection,
    sidebar_open: bool,
    events: ResourceList<EventCollection>,
    selected: Option<SelectedEvent>,
    startups: ResourceList<StartupCollection>,
    admins: ResourceList<AdminCollection>,
}

impl AdminDashboard {
    /// Build the dashboard for an admin session
    pub fn new(api: ApiClient, auth: AuthContext) -> Result<Self> {
        match RouteGuard::require([Role::Admin]).evaluate(&auth) {
            GuardDecision::Render => {}
            decision => {
                return Err(PortalError::Authentication(format!(
                    "Admin dashboard is not available ({:?})",
                    decision
                )))
            }
        }

        Ok(Self {
            api,
            auth,
            section: AdminSection::Events,
            sidebar_open: false,
            events: ResourceList::new(EventCollection),
            selected: None,
            startups: ResourceList::new(StartupCollection),
            admins: ResourceList::new(AdminCollection),
        })
    }

    /// Build and load the events section
    pub async fn open(api: ApiClient, auth: AuthContext) -> Result<Self> {
        let mut dashboard = Self::new(api, auth)?;
        // a failed load is shown in the events section, not fatal
        if let Err(e) = dashboard.events.load(&dashboard.api).await {
            warn!(error = %e, "Initial events load failed");
        }
        Ok(dashboard)
    }

    pub fn section(&self) -> AdminSection {
        self.section
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn events(&self) -> &ResourceList<EventCollection> {
        &self.events
    }

    pub fn selected_event(&self) -> Option<&SelectedEvent> {
        self.selected.as_ref()
    }

    pub fn startups(&self) -> &ResourceList<StartupCollection> {
        &self.startups
    }

    pub fn admins(&self) -> &ResourceList<AdminCollection> {
        &self.admins
    }

    /// Switch sections, loading the section's list when it has one
    pub async fn select_section(&mut self, section: AdminSection) -> Result<()> {
        self.section = section;
        match section {
            AdminSection::Events => self.events.load(&self.api).await,
            AdminSection::Startups => self.startups.load(&self.api).await,
            AdminSection::Admins => self.admins.load(&self.api).await,
            AdminSection::Programs | AdminSection::Analytics => Ok(()),
        }
    }

    /// Reload every list concurrently
    pub async fn refresh_all(&mut self) -> Result<()> {
        let api = &self.api;
        let (events, startups, admins) = futures::join!(
            self.events.load(api),
            self.startups.load(api),
            self.admins.load(api),
        );
        events.and(startups).and(admins)
    }

    pub async fn add_event(&mut self, event: NewEvent) -> Result<()> {
        if event.name.trim().is_empty() {
            return Err(PortalError::InvalidInput("Event name is required".to_string()));
        }
        if parse_event_date(&event.date).is_none() {
            return Err(PortalError::InvalidInput(format!("Invalid event date: {}", event.date)));
        }

        log_admin_action(&self.actor(), "add_event", Some(&event.name));
        self.events.create(&self.api, &event).await
    }

    pub async fn delete_event(&mut self, event_id: &str) -> Result<()> {
        log_admin_action(&self.actor(), "delete_event", Some(event_id));
        self.events.delete(&self.api, event_id).await?;

        // the event is gone on the backend even if the reload below fails
        if self.selected.as_ref().is_some_and(|s| s.event.id == event_id) {
            self.selected = None;
        }
        self.events.load(&self.api).await
    }

    /// Select an event and load its registrations
    pub async fn show_registrations(&mut self, event: Event) -> Result<()> {
        info!(event_id = %event.id, "Showing registrations");
        let mut registrations = ResourceList::new(RegistrationCollection { event_id: event.id.clone() });
        let result = registrations.load(&self.api).await;
        self.selected = Some(SelectedEvent { event, registrations });
        result
    }

    /// Leave the registrations view
    pub fn back_to_events(&mut self) {
        self.selected = None;
        self.events.clear_error();
    }

    pub async fn add_admin(&mut self, admin: NewAdmin) -> Result<()> {
        if !is_valid_email(&admin.email) {
            return Err(PortalError::InvalidInput("Invalid email format".to_string()));
        }
        if admin.password.is_empty() {
            return Err(PortalError::InvalidInput("Password is required".to_string()));
        }

        log_admin_action(&self.actor(), "add_admin", Some(&admin.email));
        self.admins.create(&self.api, &admin).await
    }

    pub async fn delete_admin(&mut self, admin_id: &str) -> Result<()> {
        log_admin_action(&self.actor(), "delete_admin", Some(admin_id));
        self.admins.remove(&self.api, admin_id).await
    }

    /// End the session; the caller navigates to the returned route
    pub fn logout(&self) -> Route {
        self.auth.logout();
        Route::Login
    }

    fn actor(&self) -> String {
        self.auth.session().identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::config::ApiConfig;

    fn api() -> ApiClient {
        ApiClient::new(&ApiConfig::default()).unwrap()
    }

    #[test]
    fn test_requires_admin_session() {
        let auth = AuthContext::new();
        assert_matches!(AdminDashboard::new(api(), auth.clone()), Err(PortalError::Authentication(_)));

        auth.login("founder@acme.io", Role::Startup).unwrap();
        assert_matches!(AdminDashboard::new(api(), auth.clone()), Err(PortalError::Authentication(_)));

        auth.login("admin@lce.org", Role::Admin).unwrap();
        let dashboard = AdminDashboard::new(api(), auth).unwrap();
        assert_eq!(dashboard.section(), AdminSection::Events);
        assert!(!dashboard.is_sidebar_open());
    }

    #[tokio::test]
    async fn test_add_event_validates_before_writing() {
        let auth = AuthContext::new();
        auth.login("admin@lce.org", Role::Admin).unwrap();
        let mut dashboard = AdminDashboard::new(api(), auth).unwrap();

        let nameless = NewEvent { date: "2024-06-15".to_string(), ..NewEvent::default() };
        assert_matches!(dashboard.add_event(nameless).await, Err(PortalError::InvalidInput(_)));

        let undated = NewEvent { name: "Pitch Night".to_string(), date: "someday".to_string(), ..NewEvent::default() };
        assert_matches!(dashboard.add_event(undated).await, Err(PortalError::InvalidInput(_)));
    }

    #[test]
    fn test_logout_returns_login() {
        let auth = AuthContext::new();
        auth.login("admin@lce.org", Role::Admin).unwrap();
        let dashboard = AdminDashboard::new(api(), auth.clone()).unwrap();

        assert_eq!(dashboard.logout(), Route::Login);
        assert!(!auth.is_authenticated());
    }
}
