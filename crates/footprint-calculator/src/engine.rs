//! The emission calculation pipeline.
//!
//! Every call runs the same three stages:
//!
//! ```text
//! ActivityProfile --sanitize--> finite, non-negative inputs
//!                 --compute---> per-category kg CO2e / year
//!                 --guard-----> non-finite outputs replaced by 0
//! ```
//!
//! The pipeline is total: it has no error path and never returns a
//! non-finite number. It performs no I/O and holds no state.

use footprint_types::{ActivityProfile, ImpactBreakdown, StreamingHours};

use crate::factors::{EmissionFactors, GRAMS_PER_KG};

/// Coerce one input to a usable quantity.
///
/// `NaN`, infinities, and negative values become `0`.
fn sanitize_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerce one output to a finite quantity.
fn guard(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Apply input sanitization to every field of a profile.
///
/// The result has only finite, non-negative fields. Two profiles that
/// sanitize to the same value always produce the same breakdown.
pub fn sanitize(profile: &ActivityProfile) -> ActivityProfile {
    let streaming = &profile.streaming_hours_per_day;
    ActivityProfile {
        emails_per_day: sanitize_value(profile.emails_per_day),
        streaming_hours_per_day: StreamingHours {
            sd: sanitize_value(streaming.sd),
            hd: sanitize_value(streaming.hd),
            ultra: sanitize_value(streaming.ultra),
        },
        cloud_storage_gb: sanitize_value(profile.cloud_storage_gb),
    }
}

/// Compute the annual emissions of a profile with the standard factors.
pub fn compute(profile: &ActivityProfile) -> ImpactBreakdown {
    compute_with(&EmissionFactors::STANDARD, profile)
}

/// Compute the annual emissions of a profile with the given factors.
///
/// `total_impact` is the sum of the three guarded category values, so the
/// sum invariant holds for every returned breakdown whose total is finite.
pub fn compute_with(factors: &EmissionFactors, profile: &ActivityProfile) -> ImpactBreakdown {
    let input = sanitize(profile);
    let streaming = &input.streaming_hours_per_day;

    let email_grams = input.emails_per_day * factors.days_per_year * factors.grams_per_email;
    let email_impact = guard(email_grams / GRAMS_PER_KG);

    let grams_per_day = streaming.sd * factors.sd_grams_per_hour
        + streaming.hd * factors.hd_grams_per_hour
        + streaming.ultra * factors.ultra_grams_per_hour;
    let streaming_impact = guard(grams_per_day * factors.days_per_year / GRAMS_PER_KG);

    let storage_impact =
        guard(input.cloud_storage_gb * factors.storage_grams_per_gb_year / GRAMS_PER_KG);

    ImpactBreakdown {
        email_impact,
        streaming_impact,
        storage_impact,
        total_impact: guard(email_impact + streaming_impact + storage_impact),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use footprint_types::ActivityField;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn default_profile_matches_reference_figures() {
        let impact = compute(&ActivityProfile::DEFAULT);
        assert!(close(impact.email_impact, 36.5));
        assert!(close(impact.streaming_impact, 33.58));
        assert!(close(impact.storage_impact, 20.0));
        assert!(close(impact.total_impact, 90.08));
    }

    #[test]
    fn zero_profile_is_all_zero() {
        assert_eq!(compute(&ActivityProfile::ZERO), ImpactBreakdown::ZERO);
    }

    #[test]
    fn total_is_exact_sum() {
        let profile = ActivityProfile::DEFAULT
            .with(ActivityField::StreamingUltra, 2.5)
            .with(ActivityField::EmailsPerDay, 117.0);
        let impact = compute(&profile);
        assert_eq!(
            impact.total_impact,
            impact.email_impact + impact.streaming_impact + impact.storage_impact
        );
    }

    #[test]
    fn nan_input_zeroes_only_its_category() {
        let profile = ActivityProfile::DEFAULT.with(ActivityField::EmailsPerDay, f64::NAN);
        let impact = compute(&profile);
        assert_eq!(impact.email_impact, 0.0);
        assert!(close(impact.streaming_impact, 33.58));
        assert!(close(impact.storage_impact, 20.0));
        assert!(impact.is_finite());
    }

    #[test]
    fn negative_and_infinite_inputs_sanitize_to_zero() {
        let profile = ActivityProfile::ZERO
            .with(ActivityField::StreamingSd, -3.0)
            .with(ActivityField::StreamingHd, f64::INFINITY)
            .with(ActivityField::CloudStorageGb, f64::NEG_INFINITY);
        assert_eq!(compute(&profile), ImpactBreakdown::ZERO);
    }

    #[test]
    fn overflowing_input_is_guarded() {
        let profile = ActivityProfile::ZERO.with(ActivityField::StreamingUltra, f64::MAX);
        let impact = compute(&profile);
        assert!(impact.is_finite());
        assert_eq!(impact.streaming_impact, 0.0);
    }

    #[test]
    fn non_finite_factor_is_guarded() {
        let factors = EmissionFactors {
            grams_per_email: f64::NAN,
            ..EmissionFactors::STANDARD
        };
        let impact = compute_with(&factors, &ActivityProfile::DEFAULT);
        assert_eq!(impact.email_impact, 0.0);
        assert!(close(impact.total_impact, 53.58));
    }

    #[test]
    fn sanitize_leaves_valid_profile_unchanged() {
        assert_eq!(sanitize(&ActivityProfile::DEFAULT), ActivityProfile::DEFAULT);
    }
}
