//! Memoizing front end for the calculation pipeline.
//!
//! [`Calculator`] remembers the last input it saw, keyed by the sanitized
//! input value rather than by identity. A repeated call with an equal
//! profile returns the cached breakdown; any changed field triggers a
//! recomputation.

use footprint_types::{ActivityProfile, ImpactBreakdown};

use crate::engine;
use crate::factors::EmissionFactors;

/// Cache hit/miss counters for a [`Calculator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that ran the pipeline.
    pub misses: u64,
}

/// A calculator bound to one set of emission factors, caching its last
/// result.
#[derive(Debug, Clone)]
pub struct Calculator {
    factors: EmissionFactors,
    last: Option<(ActivityProfile, ImpactBreakdown)>,
    stats: CacheStats,
}

impl Calculator {
    /// Create a calculator with the given factors and an empty cache.
    pub const fn new(factors: EmissionFactors) -> Self {
        Self {
            factors,
            last: None,
            stats: CacheStats { hits: 0, misses: 0 },
        }
    }

    /// The factors this calculator applies.
    pub const fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Cache counters since construction.
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Compute the breakdown for `profile`, reusing the previous result if
    /// the input value is unchanged.
    pub fn compute(&mut self, profile: &ActivityProfile) -> ImpactBreakdown {
        // Sanitized profiles hold only finite numbers, so equality is
        // reflexive and a NaN input still hits the cache.
        let key = engine::sanitize(profile);

        if let Some((_, cached)) = self.last.filter(|(cached_key, _)| *cached_key == key) {
            self.stats.hits = self.stats.hits.saturating_add(1);
            tracing::trace!(hits = self.stats.hits, "impact served from cache");
            return cached;
        }

        let impact = engine::compute_with(&self.factors, &key);
        self.stats.misses = self.stats.misses.saturating_add(1);
        tracing::debug!(
            total_kg = impact.total_impact,
            misses = self.stats.misses,
            "impact recomputed"
        );
        self.last = Some((key, impact));
        impact
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(EmissionFactors::STANDARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_types::ActivityField;

    #[test]
    fn repeated_input_hits_cache() {
        let mut calc = Calculator::default();
        let first = calc.compute(&ActivityProfile::DEFAULT);
        let second = calc.compute(&ActivityProfile::DEFAULT);
        assert_eq!(first, second);
        assert_eq!(calc.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn changed_field_recomputes() {
        let mut calc = Calculator::default();
        let before = calc.compute(&ActivityProfile::DEFAULT);
        let after = calc.compute(&ActivityProfile::DEFAULT.with(ActivityField::StreamingHd, 3.0));
        assert_ne!(before, after);
        assert_eq!(calc.stats().misses, 2);
        assert_eq!(calc.stats().hits, 0);
    }

    #[test]
    fn equivalent_malformed_inputs_share_cache_entry() {
        let mut calc = Calculator::default();
        let nan = ActivityProfile::ZERO.with(ActivityField::EmailsPerDay, f64::NAN);
        let negative = ActivityProfile::ZERO.with(ActivityField::EmailsPerDay, -1.0);
        let a = calc.compute(&nan);
        let b = calc.compute(&nan);
        let c = calc.compute(&negative);
        assert_eq!(a, ImpactBreakdown::ZERO);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(calc.stats(), CacheStats { hits: 2, misses: 1 });
    }

    #[test]
    fn cached_result_matches_pure_function() {
        let mut calc = Calculator::default();
        let profile = ActivityProfile::DEFAULT.with(ActivityField::CloudStorageGb, 1250.0);
        assert_eq!(calc.compute(&profile), engine::compute(&profile));
        assert_eq!(calc.compute(&profile), engine::compute(&profile));
    }
}
