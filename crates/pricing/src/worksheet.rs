use crate::measurements::{MeasurementField, OfferMeasurements};
use crate::rate_card::RateCard;
use crate::totals::{OfferTotals, calculate};

/// Live pricing for an offer being edited.
///
/// Owns the two calculator inputs and recomputes the totals synchronously on
/// every change. Totals are `None` until a rate card is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferWorksheet {
    rate_card: Option<RateCard>,
    measurements: OfferMeasurements,
    totals: Option<OfferTotals>,
}

impl OfferWorksheet {
    pub fn new(rate_card: Option<RateCard>, measurements: OfferMeasurements) -> Self {
        let mut sheet = Self {
            rate_card,
            measurements,
            totals: None,
        };
        sheet.recompute();
        sheet
    }

    pub fn rate_card(&self) -> Option<&RateCard> {
        self.rate_card.as_ref()
    }

    pub fn measurements(&self) -> &OfferMeasurements {
        &self.measurements
    }

    /// Current totals; `None` means "unavailable", not zero.
    pub fn totals(&self) -> Option<&OfferTotals> {
        self.totals.as_ref()
    }

    pub fn set_rate_card(&mut self, rate_card: RateCard) {
        self.rate_card = Some(rate_card);
        self.recompute();
    }

    pub fn clear_rate_card(&mut self) {
        self.rate_card = None;
        self.recompute();
    }

    pub fn set_measurements(&mut self, measurements: OfferMeasurements) {
        self.measurements = measurements;
        self.recompute();
    }

    /// Apply raw form text to one field.
    pub fn set_input(&mut self, field: MeasurementField, raw: &str) {
        self.measurements.set_input(field, raw);
        self.recompute();
    }

    pub fn set_value(&mut self, field: MeasurementField, value: f64) {
        self.measurements.set_value(field, value);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.totals = calculate(self.rate_card.as_ref(), &self.measurements);
    }
}
