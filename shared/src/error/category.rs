//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 80xx: Employee errors
/// - 85xx: Project errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Employee errors (80xx)
    Employee,
    /// Project errors (85xx)
    Project,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            8000..8500 => Self::Employee,
            8500..9000 => Self::Project,
            9000.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
