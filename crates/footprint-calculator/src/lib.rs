//! Emission calculation engine for the digital footprint tracker.
//!
//! Converts a self-reported [`ActivityProfile`] into annual kilograms of
//! CO2-equivalent, split by category. The engine is a total function: it
//! never fails, never performs I/O, and never returns a non-finite number.
//!
//! # Architecture
//!
//! - [`factors`] -- Named emission constants and the [`EmissionFactors`] bundle.
//! - [`engine`] -- The sanitize, compute, guard pipeline ([`compute`]).
//! - [`calculator`] -- [`Calculator`], a value-keyed memoizing front end.
//! - [`insights`] -- Tree equivalents, goal progress, chart shares.
//! - [`offsets`] -- Offset project catalog with exact-decimal pricing.
//!
//! # Formulas
//!
//! ```text
//! email     = emails/day * 365 * 4 g                   / 1000
//! streaming = (sd*20 + hd*36 + ultra*70) g/day * 365   / 1000
//! storage   = GB * 200 g                               / 1000
//! total     = email + streaming + storage
//! ```
//!
//! # Usage
//!
//! ```
//! use footprint_calculator::compute;
//! use footprint_types::ActivityProfile;
//!
//! let impact = compute(&ActivityProfile::DEFAULT);
//! assert!((impact.total_impact - 90.08).abs() < 0.01);
//! ```
//!
//! [`ActivityProfile`]: footprint_types::ActivityProfile

pub mod calculator;
pub mod engine;
pub mod factors;
pub mod insights;
pub mod offsets;

// Re-export primary types at crate root.
pub use calculator::{CacheStats, Calculator};
pub use engine::{compute, compute_with, sanitize};
pub use factors::EmissionFactors;
pub use insights::Insights;
pub use offsets::{CATALOG, OffsetProject, OffsetQuote};
