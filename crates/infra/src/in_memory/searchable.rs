//! Filter → sort → paginate over an in-memory store.

use core::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use catalog_core::{
    Entity, Repository, RepositoryResult, SearchFilter, SearchParams, SearchResult,
    SearchableRepository, SortDirection,
};

use super::InMemoryRepository;

/// Comparable field value extracted for sorting.
///
/// Values of different variants are incomparable and sort as equal.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.partial_cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// What a concrete searchable repository decides about its entity.
pub trait SearchPolicy<E>: Send + Sync {
    type Filter: SearchFilter;

    /// Fields `search` may sort by; anything else leaves the order untouched.
    fn sortable_fields(&self) -> &[&'static str];

    fn matches(&self, entity: &E, filter: &Self::Filter) -> bool;

    /// Value of `field` on `entity`, `None` when the entity has no such value.
    fn sort_value(&self, entity: &E, field: &str) -> Option<SortValue>;

    /// Ordering used when the request names no sort field.
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// Keep the items matching `filter`. Without a filter the input is returned
/// untouched and `predicate` is never called.
pub fn apply_filter<E, F>(
    items: Vec<E>,
    filter: Option<&F>,
    predicate: impl Fn(&E, &F) -> bool,
) -> Vec<E> {
    match filter {
        None => items,
        Some(filter) => items.into_iter().filter(|e| predicate(e, filter)).collect(),
    }
}

/// Stable sort by `field` when it is one of `sortable_fields`.
///
/// Missing values sort before present ones; ties keep their relative order in
/// both directions.
pub fn apply_sort<E>(
    items: Vec<E>,
    field: Option<&str>,
    direction: SortDirection,
    sortable_fields: &[&str],
    sort_value: impl Fn(&E, &str) -> Option<SortValue>,
) -> Vec<E> {
    let Some(field) = field.filter(|f| sortable_fields.contains(f)) else {
        return items;
    };

    let mut keyed: Vec<(Option<SortValue>, E)> = items
        .into_iter()
        .map(|item| (sort_value(&item, field), item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare(a.as_ref(), b.as_ref());
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

fn compare(a: Option<&SortValue>, b: Option<&SortValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Slice `[(page - 1) * per_page, page * per_page)`; pages past the end are empty.
pub fn apply_paginate<E>(items: Vec<E>, page: u64, per_page: u64) -> Vec<E> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    items.into_iter().skip(start).take(per_page).collect()
}

/// Searchable in-memory repository: CRUD from `InMemoryRepository`, search
/// behavior from a `SearchPolicy`.
#[derive(Debug)]
pub struct InMemorySearchableRepository<E, P> {
    inner: InMemoryRepository<E>,
    policy: P,
}

impl<E, P> InMemorySearchableRepository<E, P> {
    pub fn new(policy: P) -> Self {
        Self {
            inner: InMemoryRepository::new(),
            policy,
        }
    }
}

impl<E, P: Default> Default for InMemorySearchableRepository<E, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<E, P> InMemorySearchableRepository<E, P>
where
    E: Entity,
    P: SearchPolicy<E>,
{
    /// Run the pipeline over `items`.
    pub fn run_search(&self, items: Vec<E>, params: &SearchParams<P::Filter>) -> SearchResult<E> {
        let filtered = apply_filter(items, params.filter(), |e, f| self.policy.matches(e, f));
        let total = filtered.len() as u64;

        let (field, direction) = match params.sort() {
            Some(field) => (Some(field), params.sort_dir()),
            None => match self.policy.default_sort() {
                Some((field, direction)) => (Some(field), direction),
                None => (None, params.sort_dir()),
            },
        };
        let sorted = apply_sort(
            filtered,
            field,
            direction,
            self.policy.sortable_fields(),
            |e, f| self.policy.sort_value(e, f),
        );

        let page = apply_paginate(sorted, params.page(), params.per_page());
        SearchResult::new(page, total, params.page(), params.per_page())
    }
}

#[async_trait]
impl<E, P> Repository<E> for InMemorySearchableRepository<E, P>
where
    E: Entity + Clone + Send + Sync + 'static,
    P: Send + Sync,
{
    async fn insert(&self, entity: E) -> RepositoryResult<()> {
        self.inner.insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepositoryResult<()> {
        self.inner.bulk_insert(entities).await
    }

    async fn update(&self, entity: E) -> RepositoryResult<()> {
        self.inner.update(entity).await
    }

    async fn delete(&self, entity_id: &E::Id) -> RepositoryResult<()> {
        self.inner.delete(entity_id).await
    }

    async fn find_by_id(&self, entity_id: &E::Id) -> RepositoryResult<Option<E>> {
        self.inner.find_by_id(entity_id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<E>> {
        self.inner.find_all().await
    }
}

#[async_trait]
impl<E, P> SearchableRepository<E, P::Filter> for InMemorySearchableRepository<E, P>
where
    E: Entity + Clone + Send + Sync + 'static,
    P: SearchPolicy<E>,
{
    fn sortable_fields(&self) -> &[&'static str] {
        self.policy.sortable_fields()
    }

    async fn search(&self, params: SearchParams<P::Filter>) -> RepositoryResult<SearchResult<E>> {
        let items = self.inner.find_all().await?;
        let result = self.run_search(items, &params);
        debug!(
            entity = E::NAME,
            page = params.page(),
            per_page = params.per_page(),
            total = result.total(),
            "search"
        );
        Ok(result)
    }
}
