//! Emission factors used to annualize daily activity.
//!
//! Each factor is a named constant. [`EmissionFactors`] bundles them so a
//! deployment can revise a figure through configuration without touching
//! the calculation itself; its [`Default`] is exactly the constants below.

use serde::{Deserialize, Serialize};

/// Grams of CO2e attributed to one email.
pub const GRAMS_PER_EMAIL: f64 = 4.0;

/// Grams of CO2e per hour of standard-definition streaming.
pub const SD_GRAMS_PER_HOUR: f64 = 20.0;

/// Grams of CO2e per hour of high-definition streaming.
pub const HD_GRAMS_PER_HOUR: f64 = 36.0;

/// Grams of CO2e per hour of ultra-high-definition streaming.
pub const ULTRA_GRAMS_PER_HOUR: f64 = 70.0;

/// Grams of CO2e per gigabyte held in cloud storage for a year.
///
/// Flat rate: storage is not scaled by how long the data has been held.
pub const STORAGE_GRAMS_PER_GB_YEAR: f64 = 200.0;

/// Days used to annualize a daily quantity.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Grams in a kilogram.
pub const GRAMS_PER_KG: f64 = 1000.0;

/// The full set of factors applied by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    /// Grams per email.
    pub grams_per_email: f64,
    /// Grams per hour of SD streaming.
    pub sd_grams_per_hour: f64,
    /// Grams per hour of HD streaming.
    pub hd_grams_per_hour: f64,
    /// Grams per hour of ultra streaming.
    pub ultra_grams_per_hour: f64,
    /// Grams per stored gigabyte per year.
    pub storage_grams_per_gb_year: f64,
    /// Annualization multiplier for daily quantities.
    pub days_per_year: f64,
}

impl EmissionFactors {
    /// The factors given by the named constants in this module.
    pub const STANDARD: Self = Self {
        grams_per_email: GRAMS_PER_EMAIL,
        sd_grams_per_hour: SD_GRAMS_PER_HOUR,
        hd_grams_per_hour: HD_GRAMS_PER_HOUR,
        ultra_grams_per_hour: ULTRA_GRAMS_PER_HOUR,
        storage_grams_per_gb_year: STORAGE_GRAMS_PER_GB_YEAR,
        days_per_year: DAYS_PER_YEAR,
    };
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}
