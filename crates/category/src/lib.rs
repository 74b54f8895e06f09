//! Category domain module.
//!
//! Business rules for catalog categories, implemented purely as deterministic
//! domain logic (no IO, no storage). Storage adapters live in `catalog-infra`.

pub mod category;
pub mod fake_builder;
pub mod repository;
pub mod rules;

pub use category::{Category, CategoryProps};
pub use fake_builder::{CategoryFakeBuilder, FakeBuilderError};
pub use repository::{CategoryFilter, CategoryRepository, CategorySearchParams, CategorySearchResult};
pub use rules::{CategoryRules, CategoryValidator};
