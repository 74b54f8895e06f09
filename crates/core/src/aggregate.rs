//! Aggregate root marker.

use crate::entity::Entity;

/// Entity that acts as a consistency boundary.
///
/// Repositories are defined per aggregate root; entities nested inside an
/// aggregate are only reachable through it.
pub trait AggregateRoot: Entity {}
