//! Test-data builder for categories.
//!
//! Every property holds either a fixed value or a factory receiving the
//! index of the category being built, so `the_categories(n)` can vary them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Word};
use thiserror::Error;

use catalog_core::{EntityValidationError, Uuid};

use crate::category::{Category, CategoryProps};
use crate::rules::NAME_MAX_LENGTH;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FakeBuilderError {
    #[error("Property {0} not have a factory, use 'with' methods")]
    MissingFactory(&'static str),
}

/// Fixed value or index-aware factory.
pub enum PropFactory<T> {
    Value(T),
    Factory(Arc<dyn Fn(usize) -> T + Send + Sync>),
}

impl<T: Clone> PropFactory<T> {
    pub fn from_fn(f: impl Fn(usize) -> T + Send + Sync + 'static) -> Self {
        Self::Factory(Arc::new(f))
    }

    fn resolve(&self, index: usize) -> T {
        match self {
            Self::Value(v) => v.clone(),
            Self::Factory(f) => f(index),
        }
    }
}

impl<T: Clone> Clone for PropFactory<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(v) => Self::Value(v.clone()),
            Self::Factory(f) => Self::Factory(Arc::clone(f)),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for PropFactory<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryFakeBuilder {
    count: usize,
    category_id: Option<PropFactory<Uuid>>,
    name: PropFactory<String>,
    description: PropFactory<Option<String>>,
    is_active: PropFactory<bool>,
    created_at: Option<PropFactory<DateTime<Utc>>>,
}

impl CategoryFakeBuilder {
    pub fn a_category() -> Self {
        Self::the_categories(1)
    }

    pub fn the_categories(count: usize) -> Self {
        Self {
            count,
            category_id: None,
            name: PropFactory::from_fn(|_| Word().fake()),
            description: PropFactory::from_fn(|_| Some(Paragraph(1..3).fake())),
            is_active: PropFactory::Value(true),
            created_at: None,
        }
    }

    pub fn with_uuid(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(PropFactory::Value(category_id));
        self
    }

    pub fn with_uuid_factory(mut self, f: impl Fn(usize) -> Uuid + Send + Sync + 'static) -> Self {
        self.category_id = Some(PropFactory::from_fn(f));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = PropFactory::Value(name.into());
        self
    }

    pub fn with_name_factory(mut self, f: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.name = PropFactory::from_fn(f);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = PropFactory::Value(description);
        self
    }

    pub fn with_description_factory(
        mut self,
        f: impl Fn(usize) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.description = PropFactory::from_fn(f);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(PropFactory::Value(created_at));
        self
    }

    pub fn with_created_at_factory(
        mut self,
        f: impl Fn(usize) -> DateTime<Utc> + Send + Sync + 'static,
    ) -> Self {
        self.created_at = Some(PropFactory::from_fn(f));
        self
    }

    pub fn activate(mut self) -> Self {
        self.is_active = PropFactory::Value(true);
        self
    }

    pub fn deactivate(mut self) -> Self {
        self.is_active = PropFactory::Value(false);
        self
    }

    /// Name one character over the limit; a random one when `value` is `None`.
    pub fn with_invalid_name_too_long(mut self, value: Option<String>) -> Self {
        let len = NAME_MAX_LENGTH as usize + 1;
        let name = value.unwrap_or_else(|| (len..len + 1).fake());
        self.name = PropFactory::Value(name);
        self
    }

    pub fn category_id(&self) -> Result<Uuid, FakeBuilderError> {
        self.category_id
            .as_ref()
            .map(|p| p.resolve(0))
            .ok_or(FakeBuilderError::MissingFactory("category_id"))
    }

    pub fn name(&self) -> String {
        self.name.resolve(0)
    }

    pub fn description(&self) -> Option<String> {
        self.description.resolve(0)
    }

    pub fn is_active(&self) -> bool {
        self.is_active.resolve(0)
    }

    pub fn created_at(&self) -> Result<DateTime<Utc>, FakeBuilderError> {
        self.created_at
            .as_ref()
            .map(|p| p.resolve(0))
            .ok_or(FakeBuilderError::MissingFactory("created_at"))
    }

    /// First category; factories are called once, with index 0.
    pub fn build(&self) -> Result<Category, EntityValidationError> {
        self.build_at(0)
    }

    pub fn build_many(&self) -> Result<Vec<Category>, EntityValidationError> {
        (0..self.count).map(|index| self.build_at(index)).collect()
    }

    fn build_at(&self, index: usize) -> Result<Category, EntityValidationError> {
        Category::create(CategoryProps {
            category_id: self.category_id.as_ref().map(|p| p.resolve(index)),
            name: self.name.resolve(index),
            description: self.description.resolve(index),
            is_active: Some(self.is_active.resolve(index)),
            created_at: self.created_at.as_ref().map(|p| p.resolve(index)),
        })
    }
}

impl Category {
    pub fn fake() -> CategoryFakeBuilder {
        CategoryFakeBuilder::a_category()
    }
}
