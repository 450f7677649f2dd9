use serde::Serialize;

use angebot_core::ValueObject;

use crate::format::format_eur;
use crate::measurements::OfferMeasurements;
use crate::rate_card::RateCard;

/// Fixed value-added tax rate applied to the net total.
pub const VAT_RATE: f64 = 0.19;

/// Totals derived from a rate card and measurements.
///
/// Amounts are kept unrounded; rounding happens only when formatting.
/// Deductions are stored as positive amounts and subtracted from the net.
/// A net total below zero is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferTotals {
    wall_subtotal: f64,
    wallpaper_subtotal: f64,
    ceiling_subtotal: f64,
    window_deduction: f64,
    door_deduction: f64,
    net_total: f64,
    tax: f64,
    gross_total: f64,
}

impl ValueObject for OfferTotals {}

/// Price an offer. `None` rate card means totals are unavailable.
pub fn calculate(rate_card: Option<&RateCard>, measurements: &OfferMeasurements) -> Option<OfferTotals> {
    rate_card.map(|card| OfferTotals::compute(card, measurements))
}

impl OfferTotals {
    pub fn compute(card: &RateCard, m: &OfferMeasurements) -> Self {
        let wall_subtotal = m.wall_area() * card.wall_unit_price();
        let wallpaper_subtotal = m.wallpaper_area() * card.wallpaper_unit_price();
        let ceiling_subtotal = m.ceiling_area() * card.ceiling_unit_price();
        let window_deduction = m.window_area() * card.window_deduction_rate();
        let door_deduction = f64::from(m.door_count()) * card.door_deduction_rate();

        let net_total =
            wall_subtotal + wallpaper_subtotal + ceiling_subtotal - window_deduction - door_deduction;

        Self {
            wall_subtotal,
            wallpaper_subtotal,
            ceiling_subtotal,
            window_deduction,
            door_deduction,
            net_total,
            tax: net_total * VAT_RATE,
            gross_total: net_total * (1.0 + VAT_RATE),
        }
    }

    pub fn wall_subtotal(&self) -> f64 {
        self.wall_subtotal
    }

    pub fn wallpaper_subtotal(&self) -> f64 {
        self.wallpaper_subtotal
    }

    pub fn ceiling_subtotal(&self) -> f64 {
        self.ceiling_subtotal
    }

    pub fn window_deduction(&self) -> f64 {
        self.window_deduction
    }

    pub fn door_deduction(&self) -> f64 {
        self.door_deduction
    }

    pub fn net_total(&self) -> f64 {
        self.net_total
    }

    pub fn tax(&self) -> f64 {
        self.tax
    }

    pub fn gross_total(&self) -> f64 {
        self.gross_total
    }

    /// The labelled lines shown under an offer form, in display order.
    pub fn breakdown(&self) -> Vec<BreakdownLine> {
        vec![
            BreakdownLine::new("Wandmalerei", self.wall_subtotal, LineKind::Charge),
            BreakdownLine::new("Tapete", self.wallpaper_subtotal, LineKind::Charge),
            BreakdownLine::new("Decke", self.ceiling_subtotal, LineKind::Charge),
            BreakdownLine::new("Fensterabzug", self.window_deduction, LineKind::Deduction),
            BreakdownLine::new("Türabzug", self.door_deduction, LineKind::Deduction),
            BreakdownLine::new("Netto", self.net_total, LineKind::Total),
            BreakdownLine::new("+19% USt.", self.tax, LineKind::Tax),
            BreakdownLine::new("Brutto", self.gross_total, LineKind::Total),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Charge,
    Deduction,
    Tax,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub label: &'static str,
    pub amount: f64,
    pub kind: LineKind,
}

impl BreakdownLine {
    fn new(label: &'static str, amount: f64, kind: LineKind) -> Self {
        Self { label, amount, kind }
    }

    /// Formatted amount; deductions carry a leading minus.
    pub fn display_amount(&self) -> String {
        match self.kind {
            LineKind::Deduction => format!("-{}", format_eur(self.amount)),
            _ => format_eur(self.amount),
        }
    }
}
