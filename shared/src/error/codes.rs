//! Unified error codes for team-tracker
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 80xx: Employee errors
//! - 85xx: Project errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request (malformed body, bad path parameter)
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 80xx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,

    // ==================== 85xx: Project ====================
    /// Project not found
    ProjectNotFound = 8501,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",

            // Project
            ErrorCode::ProjectNotFound => "Project not found",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),

            // Project
            8501 => Ok(ErrorCode::ProjectNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::ProjectNotFound.code(), 8501);

        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_round_trips_every_code() {
        let all = [
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::EmployeeNotFound,
            ErrorCode::ProjectNotFound,
            ErrorCode::InternalError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        // Codes outside the catalogue in use are rejected
        for value in [0, 2, 3, 8002, 9002, 9005, 10000] {
            assert_eq!(ErrorCode::try_from(value), Err(InvalidErrorCode(value)));
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::InvalidRequest).unwrap();
        assert_eq!(json, "5");

        let json = serde_json::to_string(&ErrorCode::ProjectNotFound).unwrap();
        assert_eq!(json, "8501");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("8001").unwrap();
        assert_eq!(code, ErrorCode::EmployeeNotFound);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::RequiredField), "7");
        assert_eq!(format!("{}", ErrorCode::ProjectNotFound), "8501");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::InvalidRequest.message(), "Invalid request");
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found");
        assert_eq!(ErrorCode::ProjectNotFound.message(), "Project not found");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
