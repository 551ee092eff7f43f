use glowguide_domain::shared::DomainError;

/// Shorthand for mapping low-level persistence errors into
/// [`DomainError::Repository`] with a bit of context.
pub trait ResultExt<T> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Repository(format!("{context}: {e}")))
    }
}
