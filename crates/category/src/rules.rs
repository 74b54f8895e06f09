//! Field rules for `Category`.

use std::borrow::Cow;

use catalog_core::validation::RulesValidator;
use validator::{Validate, ValidationError};

pub const NAME_MAX_LENGTH: u64 = 255;

/// Validator over the rule-bearing fields of a category.
pub type CategoryValidator = RulesValidator<CategoryRules>;

/// Snapshot of the fields that carry rules.
///
/// `description` and `is_active` are constrained by their types alone.
#[derive(Debug, Clone, Validate)]
pub struct CategoryRules {
    #[validate(
        custom = "validate_not_empty",
        length(max = 255, message = "name must be shorter than or equal to 255 characters")
    )]
    pub name: String,
}

fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut err = ValidationError::new("not_empty");
        err.message = Some(Cow::from("name should not be empty"));
        return Err(err);
    }
    Ok(())
}
