//! Backend REST API client
//!
//! Thin JSON client over the incubator backend. Every request expects a 2xx
//! status; anything else is reported as a failure without distinguishing
//! status codes. There is no automatic retry.

use std::time::Duration;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use crate::config::ApiConfig;
use crate::models::{
    AdminAccount, Event, EventRegistrationRequest, NewAdmin, NewEvent, Registration, StartupApplication,
    StartupSummary,
};
use crate::utils::errors::{ApiError, PortalError, Result};
use crate::utils::logging::log_api_error;

/// Endpoint paths relative to the API base URL
pub mod endpoints {
    pub const GET_EVENTS: &str = "/events/getEvents";
    pub const ADD_EVENT: &str = "/events/addEvent";
    pub const DELETE_EVENT: &str = "/events/deleteEvent";
    pub const GET_REGISTRATIONS: &str = "/registrations/getRegistrations";
    pub const REGISTER_EVENT: &str = "/registrations/registerEvent";
    pub const REGISTER_STARTUP: &str = "/register";
    pub const GET_STARTUPS: &str = "/startups/getStartups";
    pub const GET_ADMINS: &str = "/admins/getAdmins";
    pub const ADD_ADMIN: &str = "/admins/addAdmin";
    pub const DELETE_ADMIN: &str = "/admins/deleteAdmin";
}

/// HTTP client for the backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(PortalError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn url_with_id(&self, path: &str, id: &str) -> String {
        format!("{}{}/{}", self.base_url, path, urlencoding::encode(id))
    }

    /// List all events
    pub async fn get_events(&self) -> Result<Vec<Event>> {
        self.get_json(self.url(endpoints::GET_EVENTS)).await
    }

    /// Create an event; the backend may echo the created record
    pub async fn add_event(&self, event: &NewEvent) -> Result<Option<Event>> {
        let body = self.send(Method::POST, self.url(endpoints::ADD_EVENT), Some(event)).await?;
        Ok(body.and_then(|value| serde_json::from_value(value).ok()))
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, self.url_with_id(endpoints::DELETE_EVENT, event_id), None)
            .await?;
        Ok(())
    }

    /// Registrations for one event
    pub async fn get_registrations(&self, event_id: &str) -> Result<Vec<Registration>> {
        self.get_json(self.url_with_id(endpoints::GET_REGISTRATIONS, event_id)).await
    }

    /// Register a visitor for an event
    pub async fn register_for_event(&self, request: &EventRegistrationRequest) -> Result<()> {
        self.send(Method::POST, self.url(endpoints::REGISTER_EVENT), Some(request)).await?;
        Ok(())
    }

    /// Submit a startup registration; returns the backend confirmation body if any
    pub async fn submit_registration(&self, application: &StartupApplication) -> Result<Option<Value>> {
        self.send(Method::POST, self.url(endpoints::REGISTER_STARTUP), Some(application)).await
    }

    pub async fn get_startups(&self) -> Result<Vec<StartupSummary>> {
        self.get_json(self.url(endpoints::GET_STARTUPS)).await
    }

    pub async fn get_admins(&self) -> Result<Vec<AdminAccount>> {
        self.get_json(self.url(endpoints::GET_ADMINS)).await
    }

    pub async fn add_admin(&self, admin: &NewAdmin) -> Result<()> {
        self.send(Method::POST, self.url(endpoints::ADD_ADMIN), Some(admin)).await?;
        Ok(())
    }

    pub async fn delete_admin(&self, admin_id: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, self.url_with_id(endpoints::DELETE_ADMIN, admin_id), None)
            .await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| transport_error(&url, e))?;
        let response = ensure_success(&url, response).await?;
        let bytes = response.bytes().await.map_err(|e| transport_error(&url, e))?;

        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            log_api_error(&url, &e.to_string(), Some("decode"));
            PortalError::Serialization(e)
        })
    }

    async fn send<B: Serialize>(&self, method: Method, url: String, body: Option<&B>) -> Result<Option<Value>> {
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| transport_error(&url, e))?;
        let response = ensure_success(&url, response).await?;

        let bytes = response.bytes().await.map_err(|e| transport_error(&url, e))?;
        Ok(parse_body(&bytes))
    }
}

/// Empty bodies are `None`; bodies that are not JSON are kept as a string value
fn parse_body(bytes: &[u8]) -> Option<Value> {
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}

async fn ensure_success(url: &str, response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log_api_error(url, &format!("HTTP {}", status), Some(&body));
    Err(PortalError::Api(ApiError::Status { status: status.as_u16(), body }))
}

fn transport_error(url: &str, e: reqwest::Error) -> PortalError {
    log_api_error(url, &e.to_string(), Some("transport"));
    let error = if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::ServiceUnavailable
    } else {
        ApiError::RequestFailed(e.to_string())
    };
    PortalError::Api(error)
}
