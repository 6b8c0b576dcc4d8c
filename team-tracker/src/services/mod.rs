//! Business logic over the record store

pub mod employee;
pub mod project;
pub mod relationship;

pub use employee::{EmployeeService, reconcile};
pub use project::ProjectService;
pub use relationship::{ProjectAction, resolve};
