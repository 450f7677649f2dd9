use anyhow::Result;

use angebot_pricing::format_eur;

use super::Context;

const RECENT: usize = 5;

pub async fn show(ctx: &Context) -> Result<()> {
    let dashboard = ctx.client().load_dashboard().await?;

    let company = dashboard
        .settings
        .as_ref()
        .map(|s| s.company_name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("(keine Firma hinterlegt)");
    println!("{company}");
    println!();
    println!("Angebote: {}   Kunden: {}", dashboard.offers.len(), dashboard.customers.len());

    match &dashboard.rate_card {
        Some(card) => {
            let example = card.example();
            println!(
                "Preisliste: Wand {} / m², 100 m² Wand = {}",
                format_eur(card.wall_unit_price()),
                format_eur(example.wall_100_m2)
            );
        }
        None => println!("Preisliste: nicht angelegt"),
    }

    if let Some(step) = dashboard.status.next_step() {
        println!("Nächster Schritt: {step}");
    }

    let recent = dashboard.recent_offers(RECENT);
    if !recent.is_empty() {
        println!();
        println!("Letzte Angebote:");
        for offer in recent {
            println!(
                "  #{:<5} {:<28} {:<18} {:>14}",
                offer.id,
                offer.customer_name(),
                offer.created_at_display(),
                offer.grand_total_display()
            );
        }
    }

    for (source, err) in &dashboard.failures {
        eprintln!("warning: {source} konnten nicht geladen werden: {err}");
    }
    Ok(())
}
