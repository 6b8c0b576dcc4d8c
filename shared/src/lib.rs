//! Shared types for team-tracker
//!
//! Wire models (requests and responses) and the error system used by the
//! server and by anything that talks to it.

pub mod error;
pub mod models;
