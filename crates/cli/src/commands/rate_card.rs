use anyhow::Result;

use angebot_pricing::{RateCard, format_eur};

use super::Context;
use crate::cli::RateCardCommands;

pub async fn run(ctx: &Context, action: &RateCardCommands) -> Result<()> {
    let client = ctx.client();
    match action {
        RateCardCommands::Show => match client.rate_card_opt().await? {
            Some(card) => print_rate_card(&card),
            None => println!("Noch keine Preisliste angelegt. Standardwerte: siehe `angebot rate-card set`."),
        },
        RateCardCommands::Set { prices } => {
            // Unset fields start from the saved card, or the form defaults.
            let base = client.rate_card_opt().await?.unwrap_or_default();
            let card = prices.apply(base);
            let saved = client.save_rate_card(&card).await?;
            println!("Preisliste gespeichert.");
            print_rate_card(&saved);
        }
    }
    Ok(())
}

pub fn print_rate_card(card: &RateCard) {
    println!("  Wand:          {} / m²", format_eur(card.wall_unit_price()));
    println!("  Tapete:        {} / m²", format_eur(card.wallpaper_unit_price()));
    println!("  Decke:         {} / m²", format_eur(card.ceiling_unit_price()));
    println!("  Fensterabzug:  {} / m²", format_eur(card.window_deduction_rate()));
    println!("  Türabzug:      {} / Tür", format_eur(card.door_deduction_rate()));

    let example = card.example();
    println!(
        "  Beispiel: 100 m² Wand = {}, 2 Türen = -{}",
        format_eur(example.wall_100_m2),
        format_eur(example.two_doors)
    );
}
