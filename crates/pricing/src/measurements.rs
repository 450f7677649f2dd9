use core::str::FromStr;

use serde::{Deserialize, Serialize};

use angebot_core::{DomainError, ValueObject};

use crate::coerce::{coerce_area, coerce_count, count_from_f64, lenient_amount, lenient_count, sanitize};

/// Measured quantities for one offer.
///
/// Invariant: every quantity is finite and `>= 0`. All constructors and
/// setters coerce, so a measurement can never be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OfferMeasurements {
    #[serde(rename = "wallM2", default, deserialize_with = "lenient_amount")]
    wall_area: f64,
    #[serde(rename = "wallpaperM2", default, deserialize_with = "lenient_amount")]
    wallpaper_area: f64,
    #[serde(rename = "ceilingM2", default, deserialize_with = "lenient_amount")]
    ceiling_area: f64,
    #[serde(rename = "windowsM2", default, deserialize_with = "lenient_amount")]
    window_area: f64,
    #[serde(rename = "doors", default, deserialize_with = "lenient_count")]
    door_count: u32,
}

impl ValueObject for OfferMeasurements {}

/// Editable measurement fields, keyed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementField {
    WallArea,
    WallpaperArea,
    CeilingArea,
    WindowArea,
    DoorCount,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 5] = [
        MeasurementField::WallArea,
        MeasurementField::WallpaperArea,
        MeasurementField::CeilingArea,
        MeasurementField::WindowArea,
        MeasurementField::DoorCount,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            MeasurementField::WallArea => "wallM2",
            MeasurementField::WallpaperArea => "wallpaperM2",
            MeasurementField::CeilingArea => "ceilingM2",
            MeasurementField::WindowArea => "windowsM2",
            MeasurementField::DoorCount => "doors",
        }
    }
}

impl FromStr for MeasurementField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasurementField::ALL
            .into_iter()
            .find(|f| f.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown measurement field: {s}")))
    }
}

impl OfferMeasurements {
    pub fn new(
        wall_area: f64,
        wallpaper_area: f64,
        ceiling_area: f64,
        window_area: f64,
        door_count: u32,
    ) -> Self {
        Self {
            wall_area: sanitize(wall_area),
            wallpaper_area: sanitize(wallpaper_area),
            ceiling_area: sanitize(ceiling_area),
            window_area: sanitize(window_area),
            door_count,
        }
    }

    pub fn wall_area(&self) -> f64 {
        self.wall_area
    }

    pub fn wallpaper_area(&self) -> f64 {
        self.wallpaper_area
    }

    pub fn ceiling_area(&self) -> f64 {
        self.ceiling_area
    }

    pub fn window_area(&self) -> f64 {
        self.window_area
    }

    pub fn door_count(&self) -> u32 {
        self.door_count
    }

    pub fn is_zero(&self) -> bool {
        self.wall_area == 0.0
            && self.wallpaper_area == 0.0
            && self.ceiling_area == 0.0
            && self.window_area == 0.0
            && self.door_count == 0
    }

    /// Set one field from raw form text. Blank or invalid text sets `0`.
    pub fn set_input(&mut self, field: MeasurementField, raw: &str) {
        match field {
            MeasurementField::WallArea => self.wall_area = coerce_area(raw),
            MeasurementField::WallpaperArea => self.wallpaper_area = coerce_area(raw),
            MeasurementField::CeilingArea => self.ceiling_area = coerce_area(raw),
            MeasurementField::WindowArea => self.window_area = coerce_area(raw),
            MeasurementField::DoorCount => self.door_count = coerce_count(raw),
        }
    }

    /// Set one field from a number. Doors truncate toward zero.
    pub fn set_value(&mut self, field: MeasurementField, value: f64) {
        match field {
            MeasurementField::WallArea => self.wall_area = sanitize(value),
            MeasurementField::WallpaperArea => self.wallpaper_area = sanitize(value),
            MeasurementField::CeilingArea => self.ceiling_area = sanitize(value),
            MeasurementField::WindowArea => self.window_area = sanitize(value),
            MeasurementField::DoorCount => self.door_count = count_from_f64(value),
        }
    }
}
