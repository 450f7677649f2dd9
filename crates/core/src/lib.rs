//! `angebot-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod text;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OfferId};
pub use value_object::ValueObject;
