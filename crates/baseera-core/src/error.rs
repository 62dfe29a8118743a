//! Error types for the Baseera application.

use thiserror::Error;

/// A shared error type for the entire Baseera application.
///
/// Most of the domain is infallible by construction (fixtures, idempotent
/// store mutations). The variants here cover the few places that can fail:
/// wizard transitions, configuration loading and strict analysis lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BaseeraError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The operation requires an authenticated session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A state machine was asked for a transition it does not allow
    #[error("Invalid transition from {from}: {reason}")]
    InvalidTransition { from: String, reason: String },

    /// User-supplied value that could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BaseeraError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(from: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from: from.into(),
            reason: reason.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an Unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for BaseeraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, BaseeraError>`.
pub type Result<T> = std::result::Result<T, BaseeraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = BaseeraError::not_found("analysis", "ana_404");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: analysis 'ana_404'");
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = BaseeraError::invalid_transition("uploading", "no document attached");
        assert!(err.is_invalid_transition());
        assert!(err.to_string().contains("uploading"));
    }

    #[test]
    fn test_invalid_input_predicate() {
        let err = BaseeraError::invalid_input("unknown action 'delete'");
        assert!(err.is_invalid_input());
        assert!(!err.is_config());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BaseeraError = io.into();
        assert!(matches!(err, BaseeraError::Io { .. }));
    }
}
