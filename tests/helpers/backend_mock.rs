//! Mock backend REST API for testing
//!
//! Emulates the incubator backend endpoints with wiremock. Each mount helper
//! takes a [`MockResponseConfig`] describing success or failure, an optional
//! delay and an optional expected call count verified when the server drops.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};
use IncubatorHub::config::ApiConfig;
use IncubatorHub::services::api::endpoints;
use IncubatorHub::ApiClient;

/// Mock backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
    /// Exact number of calls the mock must receive
    pub expected_calls: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
            expected_calls: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failing() -> Self {
        Self { success: false, ..Self::default() }
    }

    pub fn with_body(body: Value) -> Self {
        Self { custom_response: Some(body), ..Self::default() }
    }

    pub fn expect(mut self, calls: u64) -> Self {
        self.expected_calls = Some(calls);
        self
    }
}

impl BackendMockServer {
    /// Start a new mock backend
    pub async fn new() -> Self {
        super::init_test_env();
        let server = MockServer::start().await;
        let base_url = server.uri();

        Self { server, base_url }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            timeout_seconds: 5,
            ..ApiConfig::default()
        }
    }

    /// Client pointed at this server
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.api_config()).expect("Failed to build API client")
    }

    async fn mount(&self, http_method: &str, route: String, default_body: Option<Value>, config: MockResponseConfig) {
        let mut response = if config.success {
            let template = ResponseTemplate::new(200);
            match config.custom_response.or(default_body) {
                Some(body) => template.set_body_json(body),
                None => template,
            }
        } else {
            ResponseTemplate::new(500).set_body_json(
                config
                    .custom_response
                    .unwrap_or_else(|| json!({"error": "Internal Server Error"})),
            )
        };

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        let mut mock = Mock::given(method(http_method)).and(path(route)).respond_with(response);
        if let Some(calls) = config.expected_calls {
            mock = mock.expect(calls);
        }
        mock.mount(&self.server).await;
    }

    /// Setup mock for `GET /events/getEvents`
    pub async fn mock_get_events(&self, config: MockResponseConfig) {
        self.mount("GET", endpoints::GET_EVENTS.to_string(), Some(sample_events_json()), config)
            .await;
    }

    /// Setup mock for `POST /events/addEvent`
    pub async fn mock_add_event(&self, config: MockResponseConfig) {
        let created = json!({
            "id": 99,
            "name": "Demo Day",
            "posterLink": "",
            "date": "2024-09-01",
            "description": ""
        });
        self.mount("POST", endpoints::ADD_EVENT.to_string(), Some(created), config).await;
    }

    /// Setup mock for `DELETE /events/deleteEvent/{id}`
    pub async fn mock_delete_event(&self, event_id: &str, config: MockResponseConfig) {
        self.mount("DELETE", format!("{}/{}", endpoints::DELETE_EVENT, event_id), None, config)
            .await;
    }

    /// Setup mock for `GET /registrations/getRegistrations/{eventId}`
    pub async fn mock_get_registrations(&self, event_id: &str, config: MockResponseConfig) {
        self.mount(
            "GET",
            format!("{}/{}", endpoints::GET_REGISTRATIONS, event_id),
            Some(sample_registrations_json(event_id)),
            config,
        )
        .await;
    }

    /// Setup mock for `POST /registrations/registerEvent`
    pub async fn mock_register_event(&self, config: MockResponseConfig) {
        self.mount("POST", endpoints::REGISTER_EVENT.to_string(), None, config).await;
    }

    /// Setup mock for `POST /register`
    pub async fn mock_register_startup(&self, config: MockResponseConfig) {
        let confirmation = json!({"id": 42, "status": "received"});
        self.mount("POST", endpoints::REGISTER_STARTUP.to_string(), Some(confirmation), config)
            .await;
    }

    /// Setup mock for `GET /startups/getStartups`
    pub async fn mock_get_startups(&self, config: MockResponseConfig) {
        self.mount("GET", endpoints::GET_STARTUPS.to_string(), Some(sample_startups_json()), config)
            .await;
    }

    /// Setup mock for `GET /admins/getAdmins`
    pub async fn mock_get_admins(&self, config: MockResponseConfig) {
        self.mount("GET", endpoints::GET_ADMINS.to_string(), Some(sample_admins_json()), config)
            .await;
    }

    /// Setup mock for `POST /admins/addAdmin`
    pub async fn mock_add_admin(&self, config: MockResponseConfig) {
        self.mount("POST", endpoints::ADD_ADMIN.to_string(), None, config).await;
    }

    /// Setup mock for `DELETE /admins/deleteAdmin/{id}`
    pub async fn mock_delete_admin(&self, admin_id: &str, config: MockResponseConfig) {
        self.mount("DELETE", format!("{}/{}", endpoints::DELETE_ADMIN, admin_id), None, config)
            .await;
    }

    /// Drop every mounted mock (expectations are verified first)
    pub async fn reset(&self) {
        self.server.verify().await;
        self.server.reset().await;
    }

    /// Requests received on a path, oldest first
    pub async fn requests_to(&self, route: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == route)
            .collect()
    }
}

/// Events as served by `GET /events/getEvents`
pub fn sample_events_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Startup Pitch Night",
            "posterLink": "https://cdn.example.org/pitch.png",
            "date": "2024-06-15T18:00",
            "description": "Join us for an exciting evening of innovative startup pitches!"
        },
        {
            "id": "2",
            "name": "Hackathon: Future of FinTech",
            "posterLink": "",
            "date": "2024-09-01",
            "description": "A day-long hackathon to create innovative FinTech solutions."
        }
    ])
}

pub fn sample_registrations_json(event_id: &str) -> Value {
    json!([
        {"id": 1, "eventId": event_id, "name": "Asha Rao", "number": "9876543210", "email": "asha@example.org"},
        {"id": 2, "eventId": event_id, "name": "Vikram Shah", "number": "9123456780", "email": "vikram@example.org"}
    ])
}

pub fn sample_startups_json() -> Value {
    json!([
        {"id": 10, "startupName": "Acme", "industry": "Technology", "currentStage": "Ideation", "city": "Mumbai"}
    ])
}

pub fn sample_admins_json() -> Value {
    json!([
        {"id": 1, "email": "admin@lce.org"},
        {"id": 2, "email": "ops@lce.org"}
    ])
}
