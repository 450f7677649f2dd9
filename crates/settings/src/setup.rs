use serde::Serialize;

use crate::company::CompanySettings;

/// Onboarding progress for an account.
///
/// Always derived from the latest backend responses; there is no stored flag
/// that could drift from what the backend actually holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupStatus {
    pub has_settings: bool,
    pub has_rate_card: bool,
    pub has_customers: bool,
}

impl SetupStatus {
    /// `settings` is `None` when the fetch failed or returned nothing.
    pub fn derive(settings: Option<&CompanySettings>, rate_card_loaded: bool, customer_count: usize) -> Self {
        Self {
            has_settings: settings.is_some_and(CompanySettings::is_filled_in),
            has_rate_card: rate_card_loaded,
            has_customers: customer_count > 0,
        }
    }

    pub fn all_setup_completed(&self) -> bool {
        self.has_settings && self.has_rate_card && self.has_customers
    }

    /// Next onboarding step, if any.
    pub fn next_step(&self) -> Option<&'static str> {
        if !self.has_settings {
            Some("settings")
        } else if !self.has_rate_card {
            Some("rate card")
        } else if !self.has_customers {
            Some("first customer")
        } else {
            None
        }
    }
}
