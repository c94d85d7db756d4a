//! Admin account models

use serde::{Deserialize, Serialize};
use super::event::string_or_number;

/// An administrator account as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub email: String,
}

/// Body of `POST /admins/addAdmin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub email: String,
    pub password: String,
}
