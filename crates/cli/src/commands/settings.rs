use std::path::Path;

use anyhow::{Context as _, Result};

use angebot_settings::{CompanySettings, ImageUpload, UploadKind};

use super::Context;
use crate::cli::{SettingsArgs, SettingsCommands};

pub async fn run(ctx: &Context, action: &SettingsCommands) -> Result<()> {
    let client = ctx.client();
    match action {
        SettingsCommands::Show => match client.settings_opt().await? {
            Some(settings) if settings.is_filled_in() => print_settings(&settings),
            _ => println!("Noch keine Firmendaten hinterlegt."),
        },
        SettingsCommands::Set {
            fields,
            logo,
            signature,
        } => {
            // Uploads are read and size-checked before anything is sent.
            let logo = logo.as_deref().map(|p| read_image(UploadKind::Logo, p)).transpose()?;
            let signature = signature
                .as_deref()
                .map(|p| read_image(UploadKind::Signature, p))
                .transpose()?;

            let current = client.settings_opt().await?.unwrap_or_default();
            let settings = apply(current, fields);
            client
                .save_settings(&settings, logo.as_ref(), signature.as_ref())
                .await?;
            println!("Einstellungen gespeichert.");
        }
    }
    Ok(())
}

fn read_image(kind: UploadKind, path: &Path) -> Result<ImageUpload> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| kind.endpoint().to_string());
    Ok(ImageUpload::new(kind, file_name, bytes)?)
}

fn apply(mut settings: CompanySettings, args: &SettingsArgs) -> CompanySettings {
    let fields = [
        (&mut settings.first_name, &args.first_name),
        (&mut settings.last_name, &args.last_name),
        (&mut settings.company_name, &args.company_name),
        (&mut settings.phone, &args.phone),
        (&mut settings.email, &args.email),
        (&mut settings.tax_number, &args.tax_number),
        (&mut settings.street, &args.street),
        (&mut settings.house_nr, &args.house_nr),
        (&mut settings.plz, &args.plz),
        (&mut settings.ort, &args.ort),
    ];
    for (slot, value) in fields {
        if let Some(value) = value {
            *slot = value.trim().to_string();
        }
    }
    settings
}

fn print_settings(s: &CompanySettings) {
    println!("{}", s.company_name);
    println!("  Inhaber: {} {}", s.first_name, s.last_name);
    println!("  Adresse: {} {}, {} {}", s.street, s.house_nr, s.plz, s.ort);
    if !s.phone.is_empty() {
        println!("  Telefon: {}", s.phone);
    }
    if !s.email.is_empty() {
        println!("  E-Mail:  {}", s.email);
    }
    if !s.tax_number.is_empty() {
        println!("  Steuernummer: {}", s.tax_number);
    }
}
