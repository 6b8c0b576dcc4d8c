//! team-tracker: employee and project records over HTTP
//!
//! # Modules
//!
//! - [`api`]: axum routes, extractors, response shaping
//! - [`services`]: employee/project operations and relationship resolution
//! - [`db`]: record store trait with PostgreSQL and in-memory backends
//! - [`validation`]: request body rules
//! - [`config`], [`state`]: startup wiring

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;
pub mod validation;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
