use std::path::PathBuf;

use anyhow::{Context as _, Result};

use angebot_offers::{OfferDetail, OfferDocument, OfferDraft, format_created_at};
use angebot_pricing::{OfferMeasurements, format_eur};

use super::Context;
use super::quote::print_breakdown;
use crate::cli::OfferCommands;

pub async fn run(ctx: &Context, action: &OfferCommands) -> Result<()> {
    let client = ctx.client();
    match action {
        OfferCommands::List => {
            let offers = client.list_offers().await?;
            if offers.is_empty() {
                println!("Noch keine Angebote.");
            }
            for offer in &offers {
                println!(
                    "#{:<5} {:<28} {:<18} {:>14}",
                    offer.id,
                    offer.customer_name(),
                    offer.created_at_display(),
                    offer.grand_total_display()
                );
            }
        }
        OfferCommands::Show { id } => {
            let offer = client.get_offer(*id).await?;
            print_offer(&offer);
        }
        OfferCommands::Create { customer, measurements } => {
            let draft = OfferDraft::new(*customer, measurements.apply(OfferMeasurements::default()));
            let rate_card = client.rate_card_opt().await?;
            if let Some(totals) = draft.worksheet(rate_card).totals() {
                print_breakdown(totals);
            }

            let created = client.create_offer(&draft).await?;
            match created.id {
                Some(id) => println!("Angebot #{id} gespeichert."),
                None => println!("Angebot gespeichert."),
            }
        }
        OfferCommands::Update {
            id,
            customer,
            measurements,
        } => {
            let current = client.get_offer(*id).await?;
            let customer = customer
                .or(current.customer_id)
                .with_context(|| format!("offer #{id} has no customer; pass --customer"))?;
            let draft = OfferDraft::new(customer, measurements.apply(current.measurements));
            client.update_offer(*id, &draft).await?;
            println!("Angebot #{id} gespeichert.");
        }
        OfferCommands::Delete { id } => {
            client.delete_offer(*id).await?;
            println!("Angebot #{id} gelöscht.");
        }
        OfferCommands::Pdf { id, out } => {
            let doc = client.offer_pdf(*id).await?;
            let path = out
                .clone()
                .unwrap_or_else(|| PathBuf::from(OfferDocument::file_name_for(*id)));
            std::fs::write(&path, doc.bytes()).with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} ({} Bytes)", path.display(), doc.len());
        }
        OfferCommands::Mail { id } => {
            client.send_offer_mail(*id).await?;
            println!("Angebot #{id} wird per E-Mail versendet.");
        }
    }
    Ok(())
}

fn print_offer(offer: &OfferDetail) {
    match offer.id {
        Some(id) => println!("Angebot #{id}"),
        None => println!("Angebot"),
    }
    if let Some(customer) = offer.customer_id {
        println!("  Kunde:     #{customer}");
    }
    if !offer.created_at.is_empty() {
        println!("  Erstellt:  {}", format_created_at(&offer.created_at));
    }
    let m = &offer.measurements;
    println!("  Wand:      {} m²", m.wall_area());
    println!("  Tapete:    {} m²", m.wallpaper_area());
    println!("  Decke:     {} m²", m.ceiling_area());
    println!("  Fenster:   {} m²", m.window_area());
    println!("  Türen:     {}", m.door_count());
    match offer.grand_total {
        Some(total) => println!("  Brutto:    {}", format_eur(total)),
        None => println!("  Brutto:    -"),
    }
}
