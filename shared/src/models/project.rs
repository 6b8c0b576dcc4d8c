//! Project Model

use serde::{Deserialize, Serialize};

use super::employee::EmployeeResponse;

/// Create project payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Update project payload (name/description only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Project response with its employees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Always present; empty when nobody is assigned
    #[serde(default)]
    pub employees: Vec<EmployeeResponse>,
}
