//! In-memory `CategoryRepository`.

use catalog_category::{Category, CategoryFilter};
use catalog_core::SortDirection;

use crate::in_memory::{InMemorySearchableRepository, SearchPolicy, SortValue};

pub type CategoryInMemoryRepository = InMemorySearchableRepository<Category, CategorySearchPolicy>;

/// Name filter (case-insensitive substring), newest first by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySearchPolicy;

impl CategorySearchPolicy {
    pub const SORTABLE_FIELDS: [&'static str; 2] = ["name", "created_at"];
}

impl SearchPolicy<Category> for CategorySearchPolicy {
    type Filter = CategoryFilter;

    fn sortable_fields(&self) -> &[&'static str] {
        &Self::SORTABLE_FIELDS
    }

    fn matches(&self, category: &Category, filter: &CategoryFilter) -> bool {
        category
            .name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    fn sort_value(&self, category: &Category, field: &str) -> Option<SortValue> {
        match field {
            "name" => Some(SortValue::Text(category.name().to_string())),
            "created_at" => Some(SortValue::Timestamp(category.created_at())),
            _ => None,
        }
    }

    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        Some(("created_at", SortDirection::Desc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_category::CategoryFakeBuilder;
    use catalog_core::{Repository, SearchParams, SearchProps, SearchableRepository};
    use chrono::{Duration, Utc};

    fn repo() -> CategoryInMemoryRepository {
        CategoryInMemoryRepository::default()
    }

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(Category::name).collect()
    }

    #[test]
    fn declares_sortable_fields() {
        assert_eq!(repo().sortable_fields(), ["name", "created_at"]);
    }

    #[test]
    fn filter_matches_name_ignoring_case() {
        let policy = CategorySearchPolicy;
        let category = CategoryFakeBuilder::a_category()
            .with_name("Movie")
            .build()
            .unwrap();

        assert!(policy.matches(&category, &"mov".to_string()));
        assert!(policy.matches(&category, &"MOVIE".to_string()));
        assert!(!policy.matches(&category, &"series".to_string()));
    }

    #[tokio::test]
    async fn search_without_filter_returns_everything() {
        let repo = repo();
        let categories = CategoryFakeBuilder::the_categories(3).build_many().unwrap();
        repo.bulk_insert(categories).await.unwrap();

        let result = repo.search(SearchParams::default()).await.unwrap();
        assert_eq!(result.total(), 3);
        assert_eq!(result.items().len(), 3);
    }

    #[tokio::test]
    async fn default_sort_is_newest_first() {
        let repo = repo();
        let now = Utc::now();
        let categories = CategoryFakeBuilder::the_categories(3)
            .with_name_factory(|i| format!("category {i}"))
            .with_created_at_factory(move |i| now + Duration::milliseconds(i as i64 * 100))
            .build_many()
            .unwrap();
        repo.bulk_insert(categories).await.unwrap();

        let result = repo.search(SearchParams::default()).await.unwrap();
        assert_eq!(
            names(result.items()),
            ["category 2", "category 1", "category 0"]
        );
    }

    #[tokio::test]
    async fn sort_by_name() {
        let repo = repo();
        let created_at = Utc::now();
        for name in ["b", "a", "c"] {
            let category = CategoryFakeBuilder::a_category()
                .with_name(name)
                .with_created_at(created_at)
                .build()
                .unwrap();
            repo.insert(category).await.unwrap();
        }

        let result = repo
            .search(SearchParams::new(SearchProps {
                sort: Some("name".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(names(result.items()), ["a", "b", "c"]);

        let result = repo
            .search(SearchParams::new(SearchProps {
                sort: Some("name".to_string()),
                sort_dir: Some("desc".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(names(result.items()), ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn unsortable_field_keeps_insertion_order() {
        let repo = repo();
        let now = Utc::now();
        for (i, name) in ["b", "a", "c"].into_iter().enumerate() {
            let category = CategoryFakeBuilder::a_category()
                .with_name(name)
                .with_created_at(now + Duration::seconds(i as i64))
                .build()
                .unwrap();
            repo.insert(category).await.unwrap();
        }

        let result = repo
            .search(SearchParams::new(SearchProps {
                sort: Some("description".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(names(result.items()), ["b", "a", "c"]);
    }
}
