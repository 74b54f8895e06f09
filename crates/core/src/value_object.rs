//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::any::Any;

/// Value objects are domain objects that are **immutable** and **compared by value**.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Equality
///
/// Structural equality comes from `PartialEq`. On top of that, equality is
/// variant-aware: a value object never equals a value of another concrete type,
/// even when both carry the same fields. `equals_any` enforces that for callers
/// that only hold a type-erased value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Currency(String);
///
/// impl ValueObject for Currency {}
///
/// let usd = Currency("USD".to_string());
/// assert!(usd.equals(Some(&Currency("USD".to_string()))));
/// assert!(!usd.equals(None));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + 'static {
    /// Structural comparison against an optional value of the same type.
    ///
    /// `None` is never equal to anything.
    fn equals(&self, other: Option<&Self>) -> bool {
        match other {
            Some(other) => self == other,
            None => false,
        }
    }

    /// Structural comparison against a value of unknown concrete type.
    fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.equals(Some(other)))
    }
}
