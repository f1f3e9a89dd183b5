//! Domain-level error type for the edges of the rules engine.
//!
//! Rule violations inside a selection are never errors; they are reported as
//! data (`ValidationResult`, `AddDecision`). `DomainError` covers inputs the
//! engine cannot work with at all: malformed provider feeds, unclassifiable
//! role text, saved teams that break selection invariants, bad configuration.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Validation failure kinds for domain inputs
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Provider JSON could not be decoded
    MalformedJson,
    /// Role text matched none of the role categories
    UnknownRole,
    /// Same player id listed more than once
    DuplicatePlayer,
    /// Feed does not describe exactly two sides
    InvalidSquad,
    /// Persisted team cannot be rebuilt into a legal selection
    InvalidSavedTeam,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(ValidationKind, String),
    /// Missing entity in domain terms
    NotFound(NotFoundKind, String),
    /// Invalid engine configuration
    Config(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Config(d) => write!(f, "configuration error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Stable code for this error, suitable for display or logs.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::MalformedJson => ErrorCode::MalformedJson,
                ValidationKind::UnknownRole => ErrorCode::UnknownRole,
                ValidationKind::DuplicatePlayer => ErrorCode::DuplicatePlayer,
                ValidationKind::InvalidSquad => ErrorCode::InvalidSquad,
                ValidationKind::InvalidSavedTeam => ErrorCode::InvalidSavedTeam,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            DomainError::Config(_) => ErrorCode::ConfigError,
        }
    }
}
