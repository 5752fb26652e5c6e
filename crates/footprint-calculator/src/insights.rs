//! Figures derived from a breakdown for the dashboard and goals screens.

use footprint_types::{CategoryShare, ImpactBreakdown};
use serde::Serialize;

/// Kilograms of CO2e one tree absorbs in a year.
pub const KG_ABSORBED_PER_TREE_YEAR: f64 = 50.0;

/// Annual emissions the "Forest Guardian" goal asks the user to offset.
pub const FOREST_GUARDIAN_TARGET_KG: f64 = 100.0;

/// Number of trees needed to absorb the annual total, rounded up.
// Float-to-int `as` saturates, and `trees` is a positive whole number here.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn trees_to_offset(impact: &ImpactBreakdown) -> u64 {
    let trees = (impact.total_impact / KG_ABSORBED_PER_TREE_YEAR).ceil();
    if trees.is_finite() && trees > 0.0 {
        trees as u64
    } else {
        0
    }
}

/// Progress towards the "Forest Guardian" goal as a percentage in
/// `0.0..=100.0`.
pub fn forest_guardian_progress(impact: &ImpactBreakdown) -> f64 {
    let percent = impact.total_impact / FOREST_GUARDIAN_TARGET_KG * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Everything the dashboard shows besides the raw breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Trees needed to absorb a year of emissions.
    pub trees_to_offset: u64,
    /// "Forest Guardian" goal progress in percent.
    pub forest_guardian_progress: f64,
    /// Chart slices.
    pub categories: [CategoryShare; 3],
}

impl Insights {
    /// Derive all insights from a breakdown.
    pub fn from_impact(impact: &ImpactBreakdown) -> Self {
        Self {
            trees_to_offset: trees_to_offset(impact),
            forest_guardian_progress: forest_guardian_progress(impact),
            categories: impact.categories(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    fn with_total(total_impact: f64) -> ImpactBreakdown {
        ImpactBreakdown {
            total_impact,
            ..ImpactBreakdown::ZERO
        }
    }

    #[test]
    fn trees_round_up() {
        assert_eq!(trees_to_offset(&with_total(90.08)), 2);
        assert_eq!(trees_to_offset(&with_total(100.0)), 2);
        assert_eq!(trees_to_offset(&with_total(100.01)), 3);
        assert_eq!(trees_to_offset(&ImpactBreakdown::ZERO), 0);
    }

    #[test]
    fn progress_is_clamped() {
        assert!((forest_guardian_progress(&with_total(90.08)) - 90.08).abs() < 1e-9);
        assert_eq!(forest_guardian_progress(&with_total(250.0)), 100.0);
        assert_eq!(forest_guardian_progress(&with_total(-4.0)), 0.0);
    }
}
