//! Dashboard aggregation: everything the start screen shows, fetched at once.

use std::cmp::Reverse;

use serde::Serialize;

use angebot_customers::Customer;
use angebot_offers::{OfferSummary, parse_created_at};
use angebot_pricing::RateCard;
use angebot_settings::{CompanySettings, SetupStatus};

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

/// Snapshot of an account.
///
/// Each of the four sources is fetched independently. A source that fails
/// shows up empty (or `None`) and its error is kept in `failures`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub offers: Vec<OfferSummary>,
    pub customers: Vec<Customer>,
    pub settings: Option<CompanySettings>,
    pub rate_card: Option<RateCard>,
    pub status: SetupStatus,
    #[serde(skip)]
    pub failures: Vec<(&'static str, ClientError)>,
}

impl Dashboard {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The most recent offers first, at most `limit` of them.
    ///
    /// Offers without a readable timestamp go last, in backend order.
    pub fn recent_offers(&self, limit: usize) -> Vec<&OfferSummary> {
        let mut offers: Vec<&OfferSummary> = self.offers.iter().collect();
        offers.sort_by_cached_key(|o| Reverse(parse_created_at(&o.created_at)));
        offers.truncate(limit);
        offers
    }
}

fn settle<T>(source: &'static str, result: ClientResult<T>, failures: &mut Vec<(&'static str, ClientError)>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(source, error = %err, "dashboard source unavailable");
            failures.push((source, err));
            None
        }
    }
}

impl ApiClient {
    /// Fetch offers, customers, settings and rate card concurrently.
    ///
    /// Individual failures degrade the dashboard instead of failing it. The
    /// one exception is a rejected session: if any source answers 401 (or no
    /// session is present) the whole call fails with that error.
    pub async fn load_dashboard(&self) -> ClientResult<Dashboard> {
        let (offers, customers, settings, rate_card) = tokio::join!(
            self.list_offers(),
            self.list_customers(),
            self.settings_opt(),
            self.rate_card_opt(),
        );

        for err in [
            offers.as_ref().err(),
            customers.as_ref().err(),
            settings.as_ref().err(),
            rate_card.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        {
            if err.is_unauthorized() {
                return Err(match err {
                    ClientError::NotLoggedIn => ClientError::NotLoggedIn,
                    other => ClientError::Unauthorized(other.to_string()),
                });
            }
        }

        let mut failures = Vec::new();
        let offers = settle("offers", offers, &mut failures).unwrap_or_default();
        let customers = settle("customers", customers, &mut failures).unwrap_or_default();
        let settings = settle("settings", settings, &mut failures).flatten();
        let rate_card = settle("rate card", rate_card, &mut failures).flatten();

        let status = SetupStatus::derive(settings.as_ref(), rate_card.is_some(), customers.len());
        tracing::debug!(
            offers = offers.len(),
            customers = customers.len(),
            failed = failures.len(),
            "dashboard loaded"
        );

        Ok(Dashboard {
            offers,
            customers,
            settings,
            rate_card,
            status,
            failures,
        })
    }
}
