//! Category persistence contract.

use catalog_core::{SearchParams, SearchResult, SearchableRepository};

use crate::category::Category;

/// Free-text match on the category name.
pub type CategoryFilter = String;

pub type CategorySearchParams = SearchParams<CategoryFilter>;

pub type CategorySearchResult = SearchResult<Category>;

/// Searchable store of categories; any adapter implementing the generic
/// contract for `Category` qualifies.
pub trait CategoryRepository: SearchableRepository<Category, CategoryFilter> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, CategoryFilter> + ?Sized {}
