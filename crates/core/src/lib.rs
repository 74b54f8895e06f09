//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives and the repository contracts
//! (no storage implementations).

pub mod aggregate;
pub mod config;
pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod validation;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use config::{ConfigError, SearchConfig};
pub use entity::Entity;
pub use error::{DomainError, DomainResult, NotFoundError};
pub use id::{InvalidUuidError, Uuid};
pub use repository::{
    Repository, RepositoryError, RepositoryResult, SearchFilter, SearchParams, SearchProps,
    SearchResult, SearchableRepository, SortDirection,
};
pub use validation::{EntityValidationError, FieldsErrors, ValidatorFields};
pub use value_object::ValueObject;
