//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Rate cards, measurements and computed totals are all value
//! objects: replacing one means building a new value, never mutating in place.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (two rate cards with the same prices are equal)
/// - **Entity**: has identity (two customers with the same id are the same customer)
///
/// Value objects holding floating point amounts are `PartialEq` only.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
