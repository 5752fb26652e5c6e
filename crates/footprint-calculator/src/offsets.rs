//! Offset project catalog and neutralization pricing.
//!
//! All monetary calculations use [`rust_decimal::Decimal`] -- no
//! floating-point arithmetic touches a price. The emission total arrives as
//! an `f64` and is converted once, at the boundary.

use rust_decimal::Decimal;
use serde::Serialize;

/// Decimal places kept in a quoted price.
const PRICE_SCALE: u32 = 2;

/// A green initiative the user can fund to offset emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetProject {
    /// Stable identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Kilograms of CO2e removed per unit funded (one tree, one share, ...).
    pub carbon_reduction_kg: u32,
    /// Price in dollars per kilogram of CO2e offset.
    pub cost_per_kg: Decimal,
}

/// The projects offered in the offset market.
pub const CATALOG: [OffsetProject; 4] = [
    OffsetProject {
        id: "1",
        title: "Reforestation Project",
        description: "Planting native trees in the Amazon rainforest to restore biodiversity.",
        carbon_reduction_kg: 50,
        cost_per_kg: Decimal::from_parts(15, 0, 0, false, 2),
    },
    OffsetProject {
        id: "2",
        title: "Wind Farm Initiative",
        description: "Supporting the construction of wind turbines in coastal regions.",
        carbon_reduction_kg: 500,
        cost_per_kg: Decimal::from_parts(8, 0, 0, false, 2),
    },
    OffsetProject {
        id: "3",
        title: "Solar Community",
        description: "Funding solar panel installations for low-income communities.",
        carbon_reduction_kg: 300,
        cost_per_kg: Decimal::from_parts(12, 0, 0, false, 2),
    },
    OffsetProject {
        id: "4",
        title: "Ocean Cleanup",
        description: "Removing plastic waste from oceans to improve marine health.",
        carbon_reduction_kg: 100,
        cost_per_kg: Decimal::from_parts(20, 0, 0, false, 2),
    },
];

impl OffsetProject {
    /// Price of offsetting `total_kg` entirely through this project, rounded
    /// to cents.
    ///
    /// A non-finite, negative, or unrepresentable total quotes zero.
    pub fn full_offset_cost(&self, total_kg: f64) -> Decimal {
        let Ok(kg) = Decimal::try_from(total_kg) else {
            return Decimal::ZERO;
        };
        if kg.is_sign_negative() {
            return Decimal::ZERO;
        }
        kg.checked_mul(self.cost_per_kg)
            .map_or(Decimal::ZERO, |cost| cost.round_dp(PRICE_SCALE))
    }
}

/// A project together with the cost of neutralizing a given total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetQuote {
    /// The quoted project.
    pub project: OffsetProject,
    /// Dollars to offset the whole annual total.
    pub full_offset_cost: Decimal,
}

/// Quote every catalog project for `total_kg`.
pub fn quote_all(total_kg: f64) -> Vec<OffsetQuote> {
    CATALOG
        .iter()
        .map(|project| OffsetQuote {
            project: *project,
            full_offset_cost: project.full_offset_cost(total_kg),
        })
        .collect()
}
