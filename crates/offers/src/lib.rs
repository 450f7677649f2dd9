//! Offers (quotes) domain module.
//!
//! The client persists only the raw measurements of an offer; totals shown
//! for saved offers come from the backend and are displayed as-is.

pub mod document;
pub mod offer;

pub use document::OfferDocument;
pub use offer::{OfferDetail, OfferDraft, OfferSummary, format_created_at, parse_created_at};
