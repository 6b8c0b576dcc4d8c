//! Record store
//!
//! Every operation runs inside one [`UnitOfWork`]: reads and the final write
//! are committed together, and dropping a unit of work without committing
//! discards it. Two backends implement [`RecordStore`]:
//! - [`PgStore`]: PostgreSQL via sqlx
//! - [`MemoryStore`]: in-process tables (development without a database, tests)

pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::{MemoryStore, StoreStats};
pub use models::{
    Employee, EmployeeDraft, Project, ProjectDraft, ProjectRef, ProjectWithEmployees,
};
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Unique or foreign-key constraint rejected the write
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Update targeted a row that does not exist
    #[error("Record missing: {0}")]
    Missing(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Entry point of a store backend
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Open a transactional unit of work
    async fn begin(&self) -> StoreResult<Box<dyn UnitOfWork>>;
}

/// One transaction against the store
#[async_trait]
pub trait UnitOfWork: Send {
    async fn find_employee(&mut self, id: i64) -> StoreResult<Option<Employee>>;

    /// Load an employee that is about to be rewritten, locking it for the
    /// rest of the unit of work where the backend supports row locks.
    async fn find_employee_for_update(&mut self, id: i64) -> StoreResult<Option<Employee>> {
        self.find_employee(id).await
    }

    /// All employees ordered by id
    async fn find_employees(&mut self) -> StoreResult<Vec<Employee>>;

    /// Employees referencing a project, ordered by id
    async fn find_employees_by_project(&mut self, project_id: i64) -> StoreResult<Vec<Employee>>;

    async fn find_project(&mut self, id: i64) -> StoreResult<Option<Project>>;

    /// All projects ordered by id
    async fn find_projects(&mut self) -> StoreResult<Vec<Project>>;

    /// Insert or update; returns the persisted form
    async fn save_employee(&mut self, draft: EmployeeDraft) -> StoreResult<Employee>;

    /// Insert or update; returns the persisted form
    async fn save_project(&mut self, draft: ProjectDraft) -> StoreResult<Project>;

    async fn commit(self: Box<Self>) -> StoreResult<()>;
}
