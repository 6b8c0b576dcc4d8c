//! Conversion from stored entities to response models

use crate::db::{Employee, ProjectWithEmployees};
use shared::models as api;

impl From<Employee> for api::EmployeeResponse {
    fn from(e: Employee) -> Self {
        let (project_id, project_name) = match e.project {
            Some(p) => (Some(p.id), Some(p.name)),
            None => (None, None),
        };
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            middle_name: e.middle_name,
            username: e.username,
            email: e.email,
            project_id,
            project_name,
        }
    }
}

impl From<ProjectWithEmployees> for api::ProjectResponse {
    fn from(view: ProjectWithEmployees) -> Self {
        Self {
            id: view.project.id,
            name: view.project.name,
            description: view.project.description,
            employees: view.employees.into_iter().map(Into::into).collect(),
        }
    }
}
