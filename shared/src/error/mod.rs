//! Unified error system for team-tracker
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API error body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 80xx: Employee errors
//! - 85xx: Project errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::project_not_found(99);
//! assert_eq!(err.code, ErrorCode::ProjectNotFound);
//!
//! let err = AppError::field(ErrorCode::InvalidFormat, "email", "Email is not valid");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 6);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
