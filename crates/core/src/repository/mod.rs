//! Repository contracts (persistence boundary).
//!
//! Every operation is async so that an in-memory implementation and a future
//! database adapter share the same signatures.

pub mod search_params;
pub mod search_result;

use async_trait::async_trait;
use thiserror::Error;

use crate::entity::Entity;
use crate::error::NotFoundError;

pub use search_params::{SearchFilter, SearchParams, SearchProps, SortDirection};
pub use search_result::SearchResult;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Update/delete target is absent.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Backend failure reported by a storage adapter.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// CRUD over an ordered collection of entities keyed by identity.
///
/// Lookups and mutations treat absence differently: `find_by_id` answers
/// `Ok(None)`, while `update`/`delete` fail with `RepositoryError::NotFound`.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync + 'static,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()>;

    /// Append all entities, preserving their order.
    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()>;

    /// Replace the stored entity with the same identity, keeping its position.
    async fn update(&self, entity: E) -> RepositoryResult<()>;

    async fn delete(&self, entity_id: &E::Id) -> RepositoryResult<()>;

    async fn find_by_id(&self, entity_id: &E::Id) -> RepositoryResult<Option<E>>;

    async fn find_all(&self) -> RepositoryResult<Vec<E>>;

    fn entity_name(&self) -> &'static str {
        E::NAME
    }
}

/// Repository that also answers paginated searches.
#[async_trait]
pub trait SearchableRepository<E, F = String>: Repository<E>
where
    E: Entity + Send + Sync + 'static,
    F: SearchFilter,
{
    /// Field names `search` is allowed to sort by.
    fn sortable_fields(&self) -> &[&'static str];

    async fn search(&self, params: SearchParams<F>) -> RepositoryResult<SearchResult<E>>;
}
