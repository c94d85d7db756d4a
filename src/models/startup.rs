//! Startup registration models

use serde::{Deserialize, Serialize};
use super::event::string_or_number;

/// Flattened startup registration payload sent to `POST /register`.
///
/// Built from a fully validated draft; file fields carry the opaque upload handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupApplication {
    // profile
    pub startup_name: String,
    pub industry: String,
    pub sector: String,
    pub categories: String,
    pub nature_of_entity: String,
    pub brand_name: String,
    pub entity_registration_status: String,
    pub innovation_model: String,
    pub team_size: u32,
    pub incubation_status: String,
    pub current_stage: String,
    pub funding_status: String,
    pub startup_india_registration: String,
    pub business_description: String,
    // legal registration
    pub incorporation_number: String,
    pub incorporation_date: String,
    pub incorporation_certificate: String,
    pub tan_gst: String,
    pub ipr_application: String,
    // address
    pub address_line1: String,
    pub address_line2: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub pin_code: String,
    // founder
    pub founder_name: String,
    pub designation: String,
    pub email: String,
    pub mobile_number: String,
    pub founder_address: String,
    pub pan_number: String,
    pub aadhar_number: String,
    pub dipp_number: String,
    pub equity: Option<f64>,
    pub publish_profile: String,
    pub pitch_deck: String,
    pub logo: String,
    pub terms_accepted: bool,
    /// Placeholder credential; the account password is set after approval
    pub password: String,
}

/// Startup row shown in the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub startup_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub current_stage: String,
    #[serde(default)]
    pub city: String,
}
