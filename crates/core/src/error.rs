//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is raised before any repository mutation, so an `Err` always
/// means stored state is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record failed field-level validation (the message names the rule).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A primary or secondary key is already taken.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// An update or adjustment targeted a key that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A derived value fell outside its legal range.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Stable short name of the error kind, for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidRecord(_) => "invalid_record",
            DomainError::DuplicateKey(_) => "duplicate_key",
            DomainError::NotFound(_) => "not_found",
            DomainError::InvalidState(_) => "invalid_state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = DomainError::duplicate_key("sku P-001");
        assert_eq!(err.to_string(), "duplicate key: sku P-001");
        assert_eq!(err.kind(), "duplicate_key");
    }

    #[test]
    fn constructors_map_to_variants() {
        assert!(matches!(DomainError::invalid_record("x"), DomainError::InvalidRecord(_)));
        assert!(matches!(DomainError::not_found("x"), DomainError::NotFound(_)));
        assert!(matches!(DomainError::invalid_state("x"), DomainError::InvalidState(_)));
    }
}
