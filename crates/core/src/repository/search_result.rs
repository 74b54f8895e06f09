//! One page of search results.

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    /// Matching items before pagination.
    total: u64,
    current_page: u64,
    per_page: u64,
    last_page: u64,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: u64, current_page: u64, per_page: u64) -> Self {
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: last_page(total, per_page),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// Serialize with each item converted by `item_json`.
    pub fn to_json_with(&self, item_json: impl Fn(&E) -> JsonValue) -> JsonValue {
        json!({
            "items": self.items.iter().map(item_json).collect::<Vec<_>>(),
            "total": self.total,
            "current_page": self.current_page,
            "per_page": self.per_page,
            "last_page": self.last_page,
        })
    }
}

impl<E: Serialize> SearchResult<E> {
    /// Items are passed through their structural `Serialize` form.
    pub fn to_json(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(self)
    }
}

impl<E: Entity> SearchResult<E> {
    /// Items are converted through `Entity::to_json` (nested entities in API responses).
    pub fn to_entity_json(&self) -> JsonValue {
        self.to_json_with(E::to_json)
    }
}

/// `ceil(total / per_page)`, never below 1.
fn last_page(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}
