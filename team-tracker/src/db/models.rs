//! Stored entities and the drafts written back to the store
//!
//! A loaded [`Employee`] is a read-only snapshot. Writes go through an
//! [`EmployeeDraft`], which carries the project relationship as a bare id.

/// Parent project as seen from an employee: id plus the denormalized name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: i64,
    pub name: String,
}

/// Employee as loaded from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub username: String,
    pub email: Option<String>,
    pub project: Option<ProjectRef>,
}

impl Employee {
    /// Id of the current parent project, if any
    pub fn project_id(&self) -> Option<i64> {
        self.project.as_ref().map(|p| p.id)
    }
}

/// Employee values to insert (`id == None`) or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub username: String,
    pub email: Option<String>,
    pub project_id: Option<i64>,
}

impl EmployeeDraft {
    /// Start a draft from a loaded snapshot; the snapshot itself is untouched.
    pub fn from_snapshot(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            middle_name: employee.middle_name.clone(),
            username: employee.username.clone(),
            email: employee.email.clone(),
            project_id: employee.project_id(),
        }
    }
}

/// Project as loaded from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Project values to insert (`id == None`) or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

/// Project together with the employees currently referencing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectWithEmployees {
    pub project: Project,
    pub employees: Vec<Employee>,
}
