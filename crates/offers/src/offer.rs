use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use angebot_core::text::null_as_empty;
use angebot_core::{CustomerId, Entity, OfferId};
use angebot_pricing::{OfferMeasurements, OfferTotals, OfferWorksheet, RateCard, format_eur};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a backend timestamp: RFC 3339 (converted to local time) or a
/// zone-less local timestamp.
pub fn parse_created_at(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `dd.mm.yyyy, HH:MM`; empty when the timestamp is missing or unparseable.
pub fn format_created_at(raw: &str) -> String {
    parse_created_at(raw)
        .map(|dt| dt.format("%d.%m.%Y, %H:%M").to_string())
        .unwrap_or_default()
}

/// Backend-computed amount: number, numeric string or null.
fn lenient_total<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Payload for creating or updating an offer: customer + raw measurements.
///
/// Derived totals are deliberately absent; the backend prices saved offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
    pub customer_id: CustomerId,
    #[serde(flatten)]
    pub measurements: OfferMeasurements,
}

impl OfferDraft {
    pub fn new(customer_id: CustomerId, measurements: OfferMeasurements) -> Self {
        Self {
            customer_id,
            measurements,
        }
    }

    /// Live worksheet for this draft.
    pub fn worksheet(&self, rate_card: Option<RateCard>) -> OfferWorksheet {
        OfferWorksheet::new(rate_card, self.measurements)
    }
}

/// Offer row as returned by `GET /offers/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSummary {
    pub id: OfferId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_total")]
    pub grand_total: Option<f64>,
}

impl OfferSummary {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.customer_first_name.trim(), self.customer_last_name.trim())
            .trim()
            .to_string()
    }

    pub fn created_at_display(&self) -> String {
        format_created_at(&self.created_at)
    }

    /// Backend total formatted for display; `–` when the backend sent none.
    pub fn grand_total_display(&self) -> String {
        self.grand_total.map(format_eur).unwrap_or_else(|| "–".to_string())
    }
}

impl Entity for OfferSummary {
    type Id = OfferId;

    fn id(&self) -> Option<OfferId> {
        Some(self.id)
    }
}

/// Offer as returned by `GET /offers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetail {
    #[serde(default)]
    pub id: Option<OfferId>,
    #[serde(default, deserialize_with = "lenient_customer_id")]
    pub customer_id: Option<CustomerId>,
    #[serde(flatten)]
    pub measurements: OfferMeasurements,
    #[serde(default, deserialize_with = "lenient_total")]
    pub grand_total: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

/// Customer ids sometimes arrive as strings (form values echoed back).
fn lenient_customer_id<'de, D>(deserializer: D) -> Result<Option<CustomerId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().filter(|v| *v > 0).map(CustomerId::new),
        Some(Value::String(s)) => s.parse::<CustomerId>().ok(),
        _ => None,
    })
}

impl Entity for OfferDetail {
    type Id = OfferId;

    fn id(&self) -> Option<OfferId> {
        self.id
    }
}

impl OfferDetail {
    /// Editable draft, if the offer names a customer.
    pub fn to_draft(&self) -> Option<OfferDraft> {
        self.customer_id
            .map(|customer_id| OfferDraft::new(customer_id, self.measurements))
    }

    /// Recompute totals locally for editing. Display uses `grand_total`.
    pub fn local_totals(&self, rate_card: Option<&RateCard>) -> Option<OfferTotals> {
        angebot_pricing::calculate(rate_card, &self.measurements)
    }
}
