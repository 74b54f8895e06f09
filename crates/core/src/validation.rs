//! Field-level validation.
//!
//! Rules are declared with `validator` derives on a props struct; this module
//! turns a failed run into a per-field list of messages.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

/// Field name -> ordered constraint-violation messages.
pub type FieldsErrors = BTreeMap<String, Vec<String>>;

/// One or more entity fields violated their rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EntityValidationError {
    errors: FieldsErrors,
    message: String,
}

impl EntityValidationError {
    pub const DEFAULT_MESSAGE: &'static str = "Validation Error";

    pub fn new(errors: FieldsErrors) -> Self {
        Self {
            errors,
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn errors(&self) -> &FieldsErrors {
        &self.errors
    }

    /// Number of invalid fields (not the number of messages).
    pub fn count(&self) -> usize {
        self.errors.len()
    }
}

/// Validator contract: run the rules, then inspect either the errors or the
/// validated data.
pub trait ValidatorFields<P> {
    /// Returns `true` when `data` passes every rule.
    fn validate(&mut self, data: &P) -> bool;

    fn errors(&self) -> Option<&FieldsErrors>;

    fn validated_data(&self) -> Option<&P>;
}

/// `ValidatorFields` backed by the rules a `validator::Validate` derive declares.
#[derive(Debug, Clone)]
pub struct RulesValidator<P> {
    errors: Option<FieldsErrors>,
    validated: Option<P>,
}

impl<P> RulesValidator<P> {
    pub fn new() -> Self {
        Self {
            errors: None,
            validated: None,
        }
    }
}

impl<P> Default for RulesValidator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Validate + Clone> ValidatorFields<P> for RulesValidator<P> {
    fn validate(&mut self, data: &P) -> bool {
        match data.validate() {
            Ok(()) => {
                self.errors = None;
                self.validated = Some(data.clone());
                true
            }
            Err(errors) => {
                self.errors = Some(fields_errors(&errors));
                self.validated = None;
                false
            }
        }
    }

    fn errors(&self) -> Option<&FieldsErrors> {
        self.errors.as_ref()
    }

    fn validated_data(&self) -> Option<&P> {
        self.validated.as_ref()
    }
}

/// Run `data`'s rules once and convert a failure into `EntityValidationError`.
pub fn validate_fields<P: Validate + Clone>(data: &P) -> Result<(), EntityValidationError> {
    let mut validator = RulesValidator::<P>::new();
    if validator.validate(data) {
        return Ok(());
    }
    let errors = validator.errors.take().unwrap_or_default();
    debug!(invalid_fields = errors.len(), "validation failed");
    Err(EntityValidationError::new(errors))
}

/// `true` when every field in `expected` is present in `actual` with exactly
/// the expected messages. Extra fields in `actual` are ignored.
pub fn contains_error_messages(actual: &FieldsErrors, expected: &FieldsErrors) -> bool {
    expected
        .iter()
        .all(|(field, messages)| actual.get(field) == Some(messages))
}

fn fields_errors(errors: &ValidationErrors) -> FieldsErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
