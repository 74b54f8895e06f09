//! In-memory repositories for tests/dev.

pub mod searchable;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::{debug, warn};

use catalog_core::{Entity, NotFoundError, Repository, RepositoryError, RepositoryResult, ValueObject};

pub use searchable::{InMemorySearchableRepository, SearchPolicy, SortValue};

/// Ordered in-memory store of entities.
///
/// Insertion order is kept; `update` replaces in place. Reads hand out clones,
/// so callers never alias stored entities.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<E>>> {
        self.items
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<E>>> {
        self.items
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    fn position(items: &[E], entity_id: &E::Id) -> Option<usize> {
        items
            .iter()
            .position(|item| item.entity_id().equals(Some(entity_id)))
    }

    fn not_found(entity_id: &E::Id) -> RepositoryError {
        warn!(entity = E::NAME, id = %entity_id, "entity not found");
        NotFoundError::new(entity_id, E::NAME).into()
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync + 'static,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        debug!(entity = E::NAME, id = %entity.entity_id(), "insert");
        self.write()?.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        debug!(entity = E::NAME, count = entities.len(), "bulk insert");
        self.write()?.extend(entities);
        Ok(())
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        let mut items = self.write()?;
        let Some(index) = Self::position(&items, entity.entity_id()) else {
            return Err(Self::not_found(entity.entity_id()));
        };
        debug!(entity = E::NAME, id = %entity.entity_id(), "update");
        items[index] = entity;
        Ok(())
    }

    async fn delete(&self, entity_id: &E::Id) -> RepositoryResult<()> {
        let mut items = self.write()?;
        let Some(index) = Self::position(&items, entity_id) else {
            return Err(Self::not_found(entity_id));
        };
        debug!(entity = E::NAME, id = %entity_id, "delete");
        items.remove(index);
        Ok(())
    }

    async fn find_by_id(&self, entity_id: &E::Id) -> RepositoryResult<Option<E>> {
        let items = self.read()?;
        Ok(Self::position(&items, entity_id).map(|index| items[index].clone()))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.read()?.clone())
    }
}
