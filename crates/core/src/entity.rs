//! Entity trait: identity + continuity across state changes.

use serde_json::Value as JsonValue;

use crate::value_object::ValueObject;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identity value object.
    type Id: ValueObject + core::fmt::Display + Send + Sync;

    /// Variant name used in diagnostics (e.g. `"Category"`).
    const NAME: &'static str;

    /// Returns the entity identifier.
    fn entity_id(&self) -> &Self::Id;

    /// Plain structural representation of the entity.
    fn to_json(&self) -> JsonValue;

    /// Two entities are the same entity when their identities are equal,
    /// whatever their other fields hold.
    fn equals(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.entity_id().equals(Some(other.entity_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Uuid;
    use serde_json::json;

    #[derive(Debug, Clone)]
    struct StubEntity {
        entity_id: Uuid,
        name: String,
    }

    impl Entity for StubEntity {
        type Id = Uuid;
        const NAME: &'static str = "StubEntity";

        fn entity_id(&self) -> &Uuid {
            &self.entity_id
        }

        fn to_json(&self) -> JsonValue {
            json!({ "entity_id": self.entity_id.id(), "name": self.name })
        }
    }

    #[test]
    fn same_identity_means_same_entity() {
        let id = Uuid::new();
        let a = StubEntity {
            entity_id: id.clone(),
            name: "a".to_string(),
        };
        let b = StubEntity {
            entity_id: id,
            name: "b".to_string(),
        };
        assert!(a.equals(&b));
    }

    #[test]
    fn different_identity_means_different_entity() {
        let a = StubEntity {
            entity_id: Uuid::new(),
            name: "same".to_string(),
        };
        let b = StubEntity {
            entity_id: Uuid::new(),
            name: "same".to_string(),
        };
        assert!(!a.equals(&b));
    }

    #[test]
    fn to_json_exposes_identity() {
        let a = StubEntity {
            entity_id: Uuid::parse("37e67ec7-295d-4eb4-a9c5-8a2b7af53cf4").unwrap(),
            name: "a".to_string(),
        };
        assert_eq!(
            a.to_json(),
            json!({ "entity_id": "37e67ec7-295d-4eb4-a9c5-8a2b7af53cf4", "name": "a" })
        );
    }
}
