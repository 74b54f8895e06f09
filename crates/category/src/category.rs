use chrono::{DateTime, Utc};
use serde_json::{Value as JsonValue, json};

use catalog_core::validation::validate_fields;
use catalog_core::{AggregateRoot, Entity, EntityValidationError, Uuid};

use crate::rules::CategoryRules;

/// Constructor input; absent fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProps {
    /// Generated when absent.
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to active.
    pub is_active: Option<bool>,
    /// Defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

/// Aggregate root: Category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Build a category without running validation (rehydration path).
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Create command: build and validate once.
    pub fn create(props: CategoryProps) -> Result<Self, EntityValidationError> {
        let category = Self::new(props);
        category.validate()?;
        Ok(category)
    }

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename; an invalid name is rejected and the previous one kept.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(err) = self.validate() {
            self.name = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let previous = std::mem::replace(&mut self.description, description);
        if let Err(err) = self.validate() {
            self.description = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn validate(&self) -> Result<(), EntityValidationError> {
        #[cfg(test)]
        probe::record();

        validate_fields(&CategoryRules {
            name: self.name.clone(),
        })
    }
}

impl Entity for Category {
    type Id = Uuid;
    const NAME: &'static str = "Category";

    fn entity_id(&self) -> &Self::Id {
        &self.category_id
    }

    fn to_json(&self) -> JsonValue {
        json!({
            "category_id": self.category_id.id(),
            "name": self.name,
            "description": self.description,
            "is_active": self.is_active,
            "created_at": self.created_at,
        })
    }
}

impl AggregateRoot for Category {}


#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::validation::{FieldsErrors, contains_error_messages};

    fn movie() -> CategoryProps {
        CategoryProps {
            name: "Movie".to_string(),
            ..Default::default()
        }
    }

    fn expected(field: &str, messages: &[&str]) -> FieldsErrors {
        FieldsErrors::from([(
            field.to_string(),
            messages.iter().map(|m| m.to_string()).collect(),
        )])
    }

    #[test]
    fn new_applies_defaults() {
        let category = Category::new(movie());

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert_eq!(category.category_id().id().len(), 36);
    }

    #[test]
    fn new_keeps_every_given_value() {
        let created_at = Utc::now();
        let category_id = Uuid::new();
        let category = Category::new(CategoryProps {
            category_id: Some(category_id.clone()),
            name: "Movie".to_string(),
            description: Some("Movie description".to_string()),
            is_active: Some(false),
            created_at: Some(created_at),
        });

        assert_eq!(category.category_id(), &category_id);
        assert_eq!(category.description(), Some("Movie description"));
        assert!(!category.is_active());
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn new_does_not_validate() {
        probe::reset();
        let category = Category::new(CategoryProps::default());
        assert_eq!(category.name(), "");
        assert_eq!(probe::calls(), 0);
    }

    #[test]
    fn create_validates_exactly_once() {
        probe::reset();
        let category = Category::create(CategoryProps {
            is_active: Some(false),
            ..movie()
        })
        .unwrap();

        assert!(!category.is_active());
        assert_eq!(category.description(), None);
        assert_eq!(probe::calls(), 1);
    }

    #[test]
    fn create_rejects_empty_name() {
        let err = Category::create(CategoryProps::default()).unwrap_err();
        assert_eq!(err.count(), 1);
        assert!(contains_error_messages(
            err.errors(),
            &expected("name", &["name should not be empty"])
        ));
    }

    #[test]
    fn create_rejects_too_long_name() {
        let err = Category::create(CategoryProps {
            name: "a".repeat(256),
            ..Default::default()
        })
        .unwrap_err();
        assert!(contains_error_messages(
            err.errors(),
            &expected("name", &["name must be shorter than or equal to 255 characters"])
        ));
    }

    #[test]
    fn change_name() {
        let mut category = Category::create(movie()).unwrap();
        category.change_name("Series").unwrap();
        assert_eq!(category.name(), "Series");
    }

    #[test]
    fn change_name_rejects_invalid_and_keeps_previous() {
        let mut category = Category::create(movie()).unwrap();

        let err = category.change_name("").unwrap_err();
        assert!(contains_error_messages(
            err.errors(),
            &expected("name", &["name should not be empty"])
        ));
        assert_eq!(category.name(), "Movie");

        assert!(category.change_name("a".repeat(256)).is_err());
        assert_eq!(category.name(), "Movie");
    }

    #[test]
    fn change_description() {
        let mut category = Category::create(movie()).unwrap();
        category
            .change_description(Some("Documentary".to_string()))
            .unwrap();
        assert_eq!(category.description(), Some("Documentary"));

        category.change_description(None).unwrap();
        assert_eq!(category.description(), None);
    }

    #[test]
    fn activate_and_deactivate() {
        let mut category = Category::create(CategoryProps {
            is_active: Some(false),
            ..movie()
        })
        .unwrap();

        category.activate();
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn to_json_exposes_all_fields() {
        let created_at = Utc::now();
        let category = Category::create(CategoryProps {
            description: Some("Movie description".to_string()),
            is_active: Some(false),
            created_at: Some(created_at),
            ..movie()
        })
        .unwrap();

        assert_eq!(
            category.to_json(),
            json!({
                "category_id": category.category_id().id(),
                "name": "Movie",
                "description": "Movie description",
                "is_active": false,
                "created_at": created_at,
            })
        );
    }

    #[test]
    fn equality_is_by_identity() {
        let a = Category::create(movie()).unwrap();
        let mut b = a.clone();
        b.change_name("Series").unwrap();
        assert!(a.equals(&b));

        let c = Category::create(movie()).unwrap();
        assert!(!a.equals(&c));
    }
}
