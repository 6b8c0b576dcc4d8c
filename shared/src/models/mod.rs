//! Wire models shared between the server and its clients

pub mod employee;
pub mod project;

// Re-exports
pub use employee::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
pub use project::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
