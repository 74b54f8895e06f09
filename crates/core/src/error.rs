//! Domain error model.

use thiserror::Error;

use crate::id::InvalidUuidError;
use crate::validation::EntityValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// malformed identities, missing mutation targets). Infrastructure concerns
/// belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mutation targeted an entity that does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// An identifier was not a valid UUID.
    #[error(transparent)]
    InvalidUuid(#[from] InvalidUuidError),

    /// One or more entity fields violated their rules.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),
}

/// A mutation target was absent.
///
/// Lookups never raise this; only commands (update/delete) do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{entity} Not found using ID {}", .ids.join(", "))]
pub struct NotFoundError {
    ids: Vec<String>,
    entity: &'static str,
}

impl NotFoundError {
    pub fn new(id: impl core::fmt::Display, entity: &'static str) -> Self {
        Self {
            ids: vec![id.to_string()],
            entity,
        }
    }

    pub fn many<I, D>(ids: I, entity: &'static str) -> Self
    where
        I: IntoIterator<Item = D>,
        D: core::fmt::Display,
    {
        Self {
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
            entity,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }
}
