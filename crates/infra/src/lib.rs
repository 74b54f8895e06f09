//! Infrastructure layer: storage adapters for the domain repositories.

pub mod category;
pub mod in_memory;

pub use category::{CategoryInMemoryRepository, CategorySearchPolicy};
pub use in_memory::{InMemoryRepository, InMemorySearchableRepository, SearchPolicy, SortValue};
