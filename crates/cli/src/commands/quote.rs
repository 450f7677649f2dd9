use anyhow::Result;

use angebot_pricing::{LineKind, OfferMeasurements, OfferTotals, OfferWorksheet, RateCard};

use super::Context;
use crate::cli::{MeasurementArgs, RateCardArgs};

pub async fn run(ctx: &Context, measurements: &MeasurementArgs, offline: bool, prices: &RateCardArgs) -> Result<()> {
    let rate_card = if offline {
        Some(prices.apply(RateCard::default()))
    } else {
        if !prices.is_empty() {
            tracing::warn!("price flags are only used with --offline");
        }
        ctx.client().rate_card_opt().await?
    };

    let sheet = OfferWorksheet::new(rate_card, measurements.apply(OfferMeasurements::default()));
    match sheet.totals() {
        Some(totals) => print_breakdown(totals),
        None => println!("Keine Preisliste vorhanden; Summen nicht verfügbar."),
    }
    Ok(())
}

pub fn print_breakdown(totals: &OfferTotals) {
    for line in totals.breakdown() {
        if line.kind == LineKind::Total && line.label == "Netto" {
            println!("  {}", "-".repeat(32));
        }
        println!("  {:<16}{:>16}", line.label, line.display_amount());
    }
}
