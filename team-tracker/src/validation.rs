//! Input validation
//!
//! Request bodies are checked here, before any service or store call.

use shared::error::{AppError, ErrorCode};
use shared::models::{
    CreateEmployeeRequest, CreateProjectRequest, UpdateEmployeeRequest, UpdateProjectRequest,
};
use validator::ValidateEmail;

// ── Text length limits ──────────────────────────────────────────────

/// Person names, usernames, project names
pub const MAX_NAME_LEN: usize = 200;

/// Project descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::field(
            ErrorCode::RequiredField,
            field,
            format!("{field} must not be empty"),
        ));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate an optional email address: length limit, then address shape.
pub fn validate_email(value: &Option<String>, field: &str) -> Result<(), AppError> {
    let Some(email) = value else {
        return Ok(());
    };
    check_len(email, field, MAX_EMAIL_LEN)?;
    if !email.validate_email() {
        return Err(AppError::field(
            ErrorCode::InvalidFormat,
            field,
            format!("{field} is not a valid email address"),
        ));
    }
    Ok(())
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

// ── Request rules ───────────────────────────────────────────────────

/// Field rules for an incoming request body
pub trait RequestRules {
    fn check(&self) -> Result<(), AppError>;
}

impl RequestRules for CreateEmployeeRequest {
    fn check(&self) -> Result<(), AppError> {
        validate_required_text(&self.first_name, "firstName", MAX_NAME_LEN)?;
        validate_required_text(&self.last_name, "lastName", MAX_NAME_LEN)?;
        validate_optional_text(&self.middle_name, "middleName", MAX_NAME_LEN)?;
        validate_required_text(&self.username, "username", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")
    }
}

impl RequestRules for UpdateEmployeeRequest {
    fn check(&self) -> Result<(), AppError> {
        validate_required_text(&self.first_name, "firstName", MAX_NAME_LEN)?;
        validate_required_text(&self.last_name, "lastName", MAX_NAME_LEN)?;
        validate_optional_text(&self.middle_name, "middleName", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")
    }
}

impl RequestRules for CreateProjectRequest {
    fn check(&self) -> Result<(), AppError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)
    }
}

impl RequestRules for UpdateProjectRequest {
    fn check(&self) -> Result<(), AppError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_employee() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            middle_name: None,
            username: "alee".into(),
            email: Some("ann@example.com".into()),
            project_id: None,
        }
    }

    fn field_of(err: &AppError) -> Option<String> {
        err.details
            .as_ref()
            .and_then(|d| d.get("field"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    #[test]
    fn test_valid_employee_passes() {
        assert!(create_employee().check().is_ok());
    }

    #[test]
    fn test_blank_first_name_rejected() {
        let mut req = create_employee();
        req.first_name = "   ".into();
        let err = req.check().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(field_of(&err).as_deref(), Some("firstName"));
    }

    #[test]
    fn test_blank_username_rejected_on_create() {
        let mut req = create_employee();
        req.username = String::new();
        let err = req.check().unwrap_err();
        assert_eq!(field_of(&err).as_deref(), Some("username"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut req = create_employee();
        req.email = Some("not-an-email".into());
        let err = req.check().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(field_of(&err).as_deref(), Some("email"));
    }

    #[test]
    fn test_absent_email_accepted() {
        let mut req = create_employee();
        req.email = None;
        assert!(req.check().is_ok());
    }

    #[test]
    fn test_long_name_rejected() {
        let mut req = create_employee();
        req.last_name = "x".repeat(MAX_NAME_LEN + 1);
        let err = req.check().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(validate_required_text(&"é".repeat(MAX_NAME_LEN), "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_project_rules() {
        let ok = CreateProjectRequest {
            name: "Quack".into(),
            description: Some("d".repeat(MAX_NOTE_LEN)),
        };
        assert!(ok.check().is_ok());

        let blank = UpdateProjectRequest {
            name: " ".into(),
            description: None,
        };
        assert_eq!(blank.check().unwrap_err().code, ErrorCode::RequiredField);

        let long = UpdateProjectRequest {
            name: "Quack".into(),
            description: Some("d".repeat(MAX_NOTE_LEN + 1)),
        };
        assert_eq!(long.check().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }
}
