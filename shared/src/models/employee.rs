//! Employee Model

use serde::{Deserialize, Serialize};

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Project reference (numeric ID)
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Update employee payload
///
/// Full replacement of the scalar fields. Username is fixed at creation and
/// is not part of this contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Requested project reference; `None` detaches
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Employee response, with the parent project flattened in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub username: String,
    pub email: Option<String>,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
}
