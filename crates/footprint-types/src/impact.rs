//! Calculator output types.
//!
//! Every quantity is kilograms of CO2-equivalent per year. Values are never
//! stored; they are recomputed from an [`ActivityProfile`] on demand.
//!
//! [`ActivityProfile`]: crate::ActivityProfile

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Categorized and total emissions for one activity profile.
///
/// `total_impact` is always the exact sum of the three category fields, and
/// every field is finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ImpactBreakdown {
    /// Annual emissions from email traffic.
    pub email_impact: f64,
    /// Annual emissions from video streaming.
    pub streaming_impact: f64,
    /// Annual emissions from data held in cloud storage.
    pub storage_impact: f64,
    /// Sum of the three categories.
    pub total_impact: f64,
}

/// An emission category shown in the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ImpactCategory {
    /// Video streaming.
    Streaming,
    /// Email traffic.
    Emails,
    /// Cloud storage.
    CloudStorage,
}

impl ImpactCategory {
    /// Display label for the category.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Streaming => "Streaming",
            Self::Emails => "Emails",
            Self::CloudStorage => "Cloud Storage",
        }
    }
}

/// One slice of the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CategoryShare {
    /// Which category this slice represents.
    pub category: ImpactCategory,
    /// Emissions in kg CO2e per year.
    pub kg: f64,
    /// Fraction of the total, in `0.0..=1.0`. Zero when the total is zero.
    pub share: f64,
}

impl ImpactBreakdown {
    /// A breakdown with every field at zero.
    pub const ZERO: Self = Self {
        email_impact: 0.0,
        streaming_impact: 0.0,
        storage_impact: 0.0,
        total_impact: 0.0,
    };

    /// Returns `true` if every field is a finite number.
    pub const fn is_finite(&self) -> bool {
        self.email_impact.is_finite()
            && self.streaming_impact.is_finite()
            && self.storage_impact.is_finite()
            && self.total_impact.is_finite()
    }

    /// The three categories in chart order with their share of the total.
    pub fn categories(&self) -> [CategoryShare; 3] {
        let slice = |category, kg: f64| CategoryShare {
            category,
            kg,
            share: if self.total_impact > 0.0 {
                kg / self.total_impact
            } else {
                0.0
            },
        };
        [
            slice(ImpactCategory::Streaming, self.streaming_impact),
            slice(ImpactCategory::Emails, self.email_impact),
            slice(ImpactCategory::CloudStorage, self.storage_impact),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn shares_sum_to_one() {
        let impact = ImpactBreakdown {
            email_impact: 1.0,
            streaming_impact: 2.0,
            storage_impact: 1.0,
            total_impact: 4.0,
        };
        let shares = impact.categories();
        let sum: f64 = shares.iter().map(|s| s.share).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(shares[0].category, ImpactCategory::Streaming);
        assert!((shares[0].share - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_total_has_zero_shares() {
        for share in ImpactBreakdown::ZERO.categories() {
            assert!(share.share.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_value(ImpactBreakdown::ZERO).ok();
        let keys: Vec<String> = json
            .as_ref()
            .and_then(serde_json::Value::as_object)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(
            keys,
            ["emailImpact", "storageImpact", "streamingImpact", "totalImpact"]
        );
    }
}
