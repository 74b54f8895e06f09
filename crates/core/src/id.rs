//! Identity value objects used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_object::ValueObject;

/// Raised when a string is not a hyphenated UUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ID must be a valid UUID")]
pub struct InvalidUuidError;

/// UUID identity value object.
///
/// Always holds the canonical (lower-case, hyphenated) form, so structural
/// equality on the string is equality on the UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid {
    id: String,
}

impl Uuid {
    /// Generate a fresh random (v4) identifier.
    pub fn new() -> Self {
        let raw = uuid::Uuid::new_v4().hyphenated().to_string();
        // A freshly generated v4 value always passes.
        let id = Self::validate(&raw).unwrap_or(raw);
        Self { id }
    }

    /// Wrap an existing identifier, rejecting anything that is not a hyphenated UUID.
    pub fn parse(raw: &str) -> Result<Self, InvalidUuidError> {
        let id = Self::validate(raw)?;
        Ok(Self { id })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn validate(raw: &str) -> Result<String, InvalidUuidError> {
        #[cfg(test)]
        probe::record();

        // Only the 36-char hyphenated grammar is accepted (no braces, urn or simple form).
        if raw.len() != 36 {
            return Err(InvalidUuidError);
        }
        let parsed = uuid::Uuid::try_parse(raw).map_err(|_| InvalidUuidError)?;
        if !is_rfc_uuid(&parsed) {
            return Err(InvalidUuidError);
        }
        Ok(parsed.hyphenated().to_string())
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for Uuid {}

impl core::fmt::Display for Uuid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for Uuid {
    type Err = InvalidUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidUuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.id
    }
}

/// RFC 4122 variant with a version of 1 to 8, or the nil / max sentinels.
fn is_rfc_uuid(parsed: &uuid::Uuid) -> bool {
    if parsed.is_nil() || parsed.as_u128() == u128::MAX {
        return true;
    }
    parsed.get_variant() == uuid::Variant::RFC4122 && (1..=8).contains(&parsed.get_version_num())
}
