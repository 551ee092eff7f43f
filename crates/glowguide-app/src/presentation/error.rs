use serde::{Deserialize, Serialize};

use glowguide_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

/// Structured error response for UI-facing commands
///
/// This provides rich error information to the frontend, including:
/// - Error code for programmatic handling
/// - Human-readable message
/// - Severity level for UI presentation
/// - Recoverability flag for retry logic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    /// Numeric error code (2xxx-6xxx range)
    pub code: u16,

    /// Human-readable error message
    pub message: String,

    /// Error severity level
    pub severity: ErrorSeverity,

    /// Whether the operation can be retried
    pub recoverable: bool,
}

impl CommandError {
    /// Create an error from an error code and message
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
        }
    }

    /// Create a generic infrastructure error
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    /// Create a rejected-transition error
    pub fn transition_rejected(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::TransitionRejected, message)
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code().code(),
            message: err.message().to_string(),
            severity: err.severity(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl From<String> for CommandError {
    fn from(message: String) -> Self {
        Self::infrastructure(message)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_domain_error_keeps_code_and_severity() {
        let err: CommandError =
            DomainError::Network("Detection request failed".to_string()).into();

        assert_eq!(err.code, 5002);
        assert!(err.recoverable);
        assert!(err.message.contains("Detection request failed"));
    }

    #[test]
    fn test_validation_helper() {
        let err = CommandError::validation("Bad input");
        assert_eq!(err.code, 6001);
        assert_eq!(err.to_string(), "[6001] Bad input");
    }
}
