use core::str::FromStr;

use serde::{Deserialize, Serialize};

use angebot_core::{DomainError, DomainResult, ValueObject};

use crate::coerce::{coerce_area, lenient_amount};

/// Per-account price table: unit prices per m² and deduction rates.
///
/// Invariant: every field is finite and non-negative. Values built from user
/// input go through [`RateCard::new`]; values read from the backend are
/// coerced on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    #[serde(rename = "wallM2Price", default, deserialize_with = "lenient_amount")]
    wall_unit_price: f64,
    #[serde(rename = "wallpaperM2Price", default, deserialize_with = "lenient_amount")]
    wallpaper_unit_price: f64,
    #[serde(rename = "ceilingM2Price", default, deserialize_with = "lenient_amount")]
    ceiling_unit_price: f64,
    /// Currency subtracted per m² of window.
    #[serde(rename = "windowDeductionM2", default, deserialize_with = "lenient_amount")]
    window_deduction_rate: f64,
    /// Currency subtracted per door. The wire name says m², the unit is "per door".
    #[serde(rename = "doorDeductionM2", default, deserialize_with = "lenient_amount")]
    door_deduction_rate: f64,
}

impl ValueObject for RateCard {}

impl Default for RateCard {
    /// The prices a fresh rate-card form starts with.
    fn default() -> Self {
        Self {
            wall_unit_price: 15.0,
            wallpaper_unit_price: 25.0,
            ceiling_unit_price: 20.0,
            window_deduction_rate: 5.0,
            door_deduction_rate: 8.0,
        }
    }
}

/// Editable rate-card fields, keyed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateCardField {
    WallUnitPrice,
    WallpaperUnitPrice,
    CeilingUnitPrice,
    WindowDeductionRate,
    DoorDeductionRate,
}

impl RateCardField {
    pub const ALL: [RateCardField; 5] = [
        RateCardField::WallUnitPrice,
        RateCardField::WallpaperUnitPrice,
        RateCardField::CeilingUnitPrice,
        RateCardField::WindowDeductionRate,
        RateCardField::DoorDeductionRate,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            RateCardField::WallUnitPrice => "wallM2Price",
            RateCardField::WallpaperUnitPrice => "wallpaperM2Price",
            RateCardField::CeilingUnitPrice => "ceilingM2Price",
            RateCardField::WindowDeductionRate => "windowDeductionM2",
            RateCardField::DoorDeductionRate => "doorDeductionM2",
        }
    }
}

impl FromStr for RateCardField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RateCardField::ALL
            .into_iter()
            .find(|f| f.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown rate card field: {s}")))
    }
}

/// Preview amounts shown next to the rate-card form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateCardExample {
    /// Price of 100 m² of wall painting.
    pub wall_100_m2: f64,
    /// Deduction for 2 doors.
    pub two_doors: f64,
}

impl RateCard {
    /// Build a rate card, rejecting negative or non-finite values.
    pub fn new(
        wall_unit_price: f64,
        wallpaper_unit_price: f64,
        ceiling_unit_price: f64,
        window_deduction_rate: f64,
        door_deduction_rate: f64,
    ) -> DomainResult<Self> {
        let card = Self {
            wall_unit_price,
            wallpaper_unit_price,
            ceiling_unit_price,
            window_deduction_rate,
            door_deduction_rate,
        };
        for field in RateCardField::ALL {
            let value = card.get(field);
            if !value.is_finite() {
                return Err(DomainError::validation(format!(
                    "{} must be a finite number",
                    field.wire_name()
                )));
            }
            if value < 0.0 {
                return Err(DomainError::validation(format!(
                    "{} must not be negative",
                    field.wire_name()
                )));
            }
        }
        Ok(card)
    }

    /// All-zero rate card.
    pub fn zero() -> Self {
        Self {
            wall_unit_price: 0.0,
            wallpaper_unit_price: 0.0,
            ceiling_unit_price: 0.0,
            window_deduction_rate: 0.0,
            door_deduction_rate: 0.0,
        }
    }

    pub fn wall_unit_price(&self) -> f64 {
        self.wall_unit_price
    }

    pub fn wallpaper_unit_price(&self) -> f64 {
        self.wallpaper_unit_price
    }

    pub fn ceiling_unit_price(&self) -> f64 {
        self.ceiling_unit_price
    }

    pub fn window_deduction_rate(&self) -> f64 {
        self.window_deduction_rate
    }

    pub fn door_deduction_rate(&self) -> f64 {
        self.door_deduction_rate
    }

    pub fn get(&self, field: RateCardField) -> f64 {
        match field {
            RateCardField::WallUnitPrice => self.wall_unit_price,
            RateCardField::WallpaperUnitPrice => self.wallpaper_unit_price,
            RateCardField::CeilingUnitPrice => self.ceiling_unit_price,
            RateCardField::WindowDeductionRate => self.window_deduction_rate,
            RateCardField::DoorDeductionRate => self.door_deduction_rate,
        }
    }

    /// Returns a copy with one field replaced by coerced form input.
    ///
    /// Blank or invalid text sets the field to `0`.
    pub fn with_input(mut self, field: RateCardField, raw: &str) -> Self {
        let value = coerce_area(raw);
        match field {
            RateCardField::WallUnitPrice => self.wall_unit_price = value,
            RateCardField::WallpaperUnitPrice => self.wallpaper_unit_price = value,
            RateCardField::CeilingUnitPrice => self.ceiling_unit_price = value,
            RateCardField::WindowDeductionRate => self.window_deduction_rate = value,
            RateCardField::DoorDeductionRate => self.door_deduction_rate = value,
        }
        self
    }

    pub fn example(&self) -> RateCardExample {
        RateCardExample {
            wall_100_m2: 100.0 * self.wall_unit_price,
            two_doors: 2.0 * self.door_deduction_rate,
        }
    }
}
