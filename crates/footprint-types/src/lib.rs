//! Shared type definitions for the digital footprint tracker.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for the presentation layer.
//!
//! # Modules
//!
//! - [`activity`] -- The activity profile and its field enumeration
//! - [`impact`] -- Calculator output (per-category and total emissions)
//! - [`records`] -- Early-access requests and achievements

pub mod activity;
pub mod impact;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use activity::{ActivityField, ActivityProfile, FieldBounds, StreamingHours, UnknownField};
pub use impact::{CategoryShare, ImpactBreakdown, ImpactCategory};
pub use records::{Achievement, EarlyAccessRequest};
