//! Event and event registration models

use serde::{Deserialize, Deserializer, Serialize};
use crate::utils::helpers::format_event_date;

/// An event as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub poster_link: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Date in long form for display
    pub fn display_date(&self) -> String {
        format_event_date(&self.date)
    }
}

/// Event payload without an id, as created by an admin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub poster_link: String,
    pub date: String,
    pub description: String,
}

/// A visitor's registration for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub event_id: String,
    pub name: String,
    pub number: String,
    pub email: String,
}

/// Body of `POST /registrations/registerEvent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrationRequest {
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub number: String,
}

/// Backends disagree on whether identifiers are strings or integers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}
