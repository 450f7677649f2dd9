//! Offer pricing (rate card × measured quantities).
//!
//! This crate contains the pricing rules for offers, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Totals are derived
//! values: they are recomputed from a rate card and measurements whenever
//! either changes and are never persisted by the client.

pub mod coerce;
pub mod format;
pub mod measurements;
pub mod rate_card;
pub mod totals;
pub mod worksheet;

pub use coerce::{coerce_area, coerce_count};
pub use format::{format_eur, round_cents};
pub use measurements::{MeasurementField, OfferMeasurements};
pub use rate_card::{RateCard, RateCardExample, RateCardField};
pub use totals::{BreakdownLine, LineKind, OfferTotals, VAT_RATE, calculate};
pub use worksheet::OfferWorksheet;
