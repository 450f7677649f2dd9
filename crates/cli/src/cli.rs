use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use angebot_core::{CustomerId, OfferId};
use angebot_pricing::{MeasurementField, OfferMeasurements, RateCard, RateCardField};

#[derive(Parser, Debug)]
#[command(name = "angebot", version, about = "Painting offers: rate card, customers, quotes")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "ANGEBOT_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ANGEBOT_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Where the login session is kept
    #[arg(long, env = "ANGEBOT_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create an account (does not log in)
    Register(CredentialArgs),

    /// Log in and remember the session
    Login(CredentialArgs),

    /// Forget the stored session
    Logout,

    /// Offers, customers and setup progress at a glance
    Dashboard,

    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Company letterhead, logo and signature
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Unit prices and deduction rates
    RateCard {
        #[command(subcommand)]
        action: RateCardCommands,
    },

    /// Manage offers
    Offers {
        #[command(subcommand)]
        action: OfferCommands,
    },

    /// Price measurements without saving anything
    Quote {
        #[command(flatten)]
        measurements: MeasurementArgs,

        /// Use the prices given here (or the defaults) instead of the
        /// account's rate card
        #[arg(long)]
        offline: bool,

        #[command(flatten)]
        prices: RateCardArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    #[arg(long, env = "ANGEBOT_EMAIL")]
    pub email: String,

    /// Read from stdin when omitted
    #[arg(long, env = "ANGEBOT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CustomerCommands {
    List,
    Show {
        id: CustomerId,
    },
    Add {
        #[command(flatten)]
        fields: CustomerArgs,
    },
    Update {
        id: CustomerId,
        #[command(flatten)]
        fields: CustomerArgs,
    },
    Delete {
        id: CustomerId,
    },
}

/// Customer fields; only the given ones are changed.
#[derive(Args, Debug, Clone, Default)]
pub struct CustomerArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub home_street: Option<String>,
    #[arg(long)]
    pub home_house_nr: Option<String>,
    #[arg(long)]
    pub home_plz: Option<String>,
    #[arg(long)]
    pub home_ort: Option<String>,
    #[arg(long)]
    pub work_street: Option<String>,
    #[arg(long)]
    pub work_house_nr: Option<String>,
    #[arg(long)]
    pub work_plz: Option<String>,
    #[arg(long)]
    pub work_ort: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommands {
    Show,
    Set {
        #[command(flatten)]
        fields: SettingsArgs,

        /// Logo image (max 2 MB)
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Signature image (max 2 MB)
        #[arg(long)]
        signature: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub company_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub tax_number: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub house_nr: Option<String>,
    #[arg(long)]
    pub plz: Option<String>,
    #[arg(long)]
    pub ort: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RateCardCommands {
    Show,
    /// Change the given prices; the rest keep their current values
    Set {
        #[command(flatten)]
        prices: RateCardArgs,
    },
}

/// Prices as typed, e.g. `12,50`. Blank or invalid text counts as 0.
#[derive(Args, Debug, Clone, Default)]
pub struct RateCardArgs {
    /// € per m² of wall painting
    #[arg(long)]
    pub wall_price: Option<String>,
    /// € per m² of wallpaper
    #[arg(long)]
    pub wallpaper_price: Option<String>,
    /// € per m² of ceiling
    #[arg(long)]
    pub ceiling_price: Option<String>,
    /// € deducted per m² of window
    #[arg(long)]
    pub window_deduction: Option<String>,
    /// € deducted per door
    #[arg(long)]
    pub door_deduction: Option<String>,
}

impl RateCardArgs {
    pub fn apply(&self, base: RateCard) -> RateCard {
        [
            (RateCardField::WallUnitPrice, &self.wall_price),
            (RateCardField::WallpaperUnitPrice, &self.wallpaper_price),
            (RateCardField::CeilingUnitPrice, &self.ceiling_price),
            (RateCardField::WindowDeductionRate, &self.window_deduction),
            (RateCardField::DoorDeductionRate, &self.door_deduction),
        ]
        .into_iter()
        .fold(base, |card, (field, raw)| match raw {
            Some(raw) => card.with_input(field, raw),
            None => card,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.wall_price.is_none()
            && self.wallpaper_price.is_none()
            && self.ceiling_price.is_none()
            && self.window_deduction.is_none()
            && self.door_deduction.is_none()
    }
}

/// Measured quantities as typed. Blank or invalid text counts as 0.
#[derive(Args, Debug, Clone, Default)]
pub struct MeasurementArgs {
    /// m² of wall to paint
    #[arg(long)]
    pub wall: Option<String>,
    /// m² of wallpaper
    #[arg(long)]
    pub wallpaper: Option<String>,
    /// m² of ceiling
    #[arg(long)]
    pub ceiling: Option<String>,
    /// m² of windows
    #[arg(long)]
    pub windows: Option<String>,
    /// Number of doors
    #[arg(long)]
    pub doors: Option<String>,
}

impl MeasurementArgs {
    pub fn apply(&self, mut base: OfferMeasurements) -> OfferMeasurements {
        for (field, raw) in [
            (MeasurementField::WallArea, &self.wall),
            (MeasurementField::WallpaperArea, &self.wallpaper),
            (MeasurementField::CeilingArea, &self.ceiling),
            (MeasurementField::WindowArea, &self.windows),
            (MeasurementField::DoorCount, &self.doors),
        ] {
            if let Some(raw) = raw {
                base.set_input(field, raw);
            }
        }
        base
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum OfferCommands {
    List,
    Show {
        id: OfferId,
    },
    Create {
        #[arg(long)]
        customer: CustomerId,
        #[command(flatten)]
        measurements: MeasurementArgs,
    },
    /// Change the given measurements; the rest keep their saved values
    Update {
        id: OfferId,
        #[arg(long)]
        customer: Option<CustomerId>,
        #[command(flatten)]
        measurements: MeasurementArgs,
    },
    Delete {
        id: OfferId,
    },
    /// Download the offer PDF
    Pdf {
        id: OfferId,
        /// Defaults to `angebot-<id>.pdf` in the current directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Have the backend email the offer to its customer
    Mail {
        id: OfferId,
    },
}
