//! The caller-side session that ties the store and the calculator together.
//!
//! A [`Session`] owns the one [`ProfileStore`] for the process and the
//! in-memory copy of the profile the user is editing. Every mutation is
//! applied in memory first and then saved. A failed save never rolls the
//! in-memory profile back; it raises the unsaved flag instead, and the next
//! successful save lowers it.

use footprint_calculator::{Calculator, EmissionFactors, Insights};
use footprint_store::{DurableMedium, ProfileStore, StoreError};
use footprint_types::{
    Achievement, ActivityField, ActivityProfile, EarlyAccessRequest, ImpactBreakdown,
};

/// Live editing state for one user.
#[derive(Debug)]
pub struct Session<M> {
    store: ProfileStore<M>,
    calculator: Calculator,
    profile: ActivityProfile,
    unsaved: bool,
}

impl<M: DurableMedium> Session<M> {
    /// Start a session, resuming the saved profile or falling back to
    /// [`ActivityProfile::DEFAULT`].
    ///
    /// Opening never writes. The default is persisted by the first
    /// mutation.
    pub fn open(store: ProfileStore<M>, factors: EmissionFactors) -> Self {
        let profile = store.load_profile().unwrap_or_else(|| {
            tracing::info!("no saved profile, starting from default");
            ActivityProfile::DEFAULT
        });
        tracing::debug!(?profile, "session opened");
        Self {
            store,
            calculator: Calculator::new(factors),
            profile,
            unsaved: false,
        }
    }

    /// The profile as currently edited, saved or not.
    pub const fn profile(&self) -> &ActivityProfile {
        &self.profile
    }

    /// Breakdown for the current profile.
    pub fn impact(&mut self) -> ImpactBreakdown {
        self.calculator.compute(&self.profile)
    }

    /// Dashboard figures for the current profile.
    pub fn insights(&mut self) -> Insights {
        Insights::from_impact(&self.impact())
    }

    /// Change one field and save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the save failed. The change is kept in
    /// memory and [`has_unsaved_changes`](Self::has_unsaved_changes)
    /// reports `true`.
    pub fn set_field(&mut self, field: ActivityField, value: f64) -> Result<(), StoreError> {
        tracing::debug!(%field, value, "field updated");
        self.profile.set(field, value);
        self.save()
    }

    /// Replace the whole profile and save.
    ///
    /// # Errors
    ///
    /// Same as [`set_field`](Self::set_field).
    pub fn replace(&mut self, profile: ActivityProfile) -> Result<(), StoreError> {
        self.profile = profile;
        self.save()
    }

    /// Go back to [`ActivityProfile::DEFAULT`] and save.
    ///
    /// # Errors
    ///
    /// Same as [`set_field`](Self::set_field).
    pub fn reset(&mut self) -> Result<(), StoreError> {
        tracing::info!("profile reset to default");
        self.replace(ActivityProfile::DEFAULT)
    }

    /// Save the in-memory profile. Used directly to retry after a failure.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the medium did not commit.
    pub fn save(&mut self) -> Result<(), StoreError> {
        match self.store.save_profile(&self.profile) {
            Ok(()) => {
                if self.unsaved {
                    tracing::info!("pending changes saved");
                }
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                self.unsaved = true;
                Err(e)
            }
        }
    }

    /// Whether the in-memory profile differs from what was last committed.
    pub const fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Record an early-access request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the request could not be committed.
    pub fn join_early_access(
        &self,
        name: &str,
        email: &str,
    ) -> Result<EarlyAccessRequest, StoreError> {
        self.store.append_early_access_request(name, email)
    }

    /// All early-access requests in submission order.
    pub fn early_access_requests(&self) -> Vec<EarlyAccessRequest> {
        self.store.list_early_access_requests()
    }

    /// Achievements to display.
    pub fn achievements(&self) -> Vec<Achievement> {
        self.store.list_achievements()
    }

    /// The underlying store.
    pub const fn store(&self) -> &ProfileStore<M> {
        &self.store
    }

    /// End the session and hand back the store.
    pub fn close(self) -> ProfileStore<M> {
        self.store
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use footprint_store::MemoryMedium;

    fn session(medium: &MemoryMedium) -> Session<&MemoryMedium> {
        Session::open(ProfileStore::new(medium), EmissionFactors::STANDARD)
    }

    #[test]
    fn opens_with_default_without_writing() {
        let medium = MemoryMedium::new();
        let session = session(&medium);
        assert_eq!(*session.profile(), ActivityProfile::DEFAULT);
        assert!(!session.has_unsaved_changes());
        assert!(medium.is_empty());
    }

    #[test]
    fn resumes_saved_profile() {
        let medium = MemoryMedium::new();
        let saved = ActivityProfile::ZERO.with(ActivityField::EmailsPerDay, 10.0);
        ProfileStore::new(&medium).save_profile(&saved).unwrap();
        assert_eq!(*session(&medium).profile(), saved);
    }

    #[test]
    fn set_field_updates_impact_and_persists() {
        let medium = MemoryMedium::new();
        let mut session = session(&medium);
        let before = session.impact();

        session.set_field(ActivityField::StreamingUltra, 1.0).unwrap();
        let after = session.impact();
        assert!((after.streaming_impact - before.streaming_impact - 25.55).abs() < 1e-9);
        assert_eq!(after.email_impact, before.email_impact);

        let reloaded = ProfileStore::new(&medium).load_profile().unwrap();
        assert_eq!(reloaded.streaming_hours_per_day.ultra, 1.0);
    }

    #[test]
    fn failed_save_keeps_edit_and_flags_unsaved() {
        let medium = MemoryMedium::new();
        let mut session = session(&medium);
        session.reset().unwrap();

        medium.refuse_writes(true);
        assert!(session.set_field(ActivityField::EmailsPerDay, 150.0).is_err());
        assert!(session.has_unsaved_changes());
        assert_eq!(session.profile().emails_per_day, 150.0);
        assert_eq!(
            session.store().load_profile(),
            Some(ActivityProfile::DEFAULT)
        );

        medium.refuse_writes(false);
        session.save().unwrap();
        assert!(!session.has_unsaved_changes());
        assert_eq!(session.store().load_profile().unwrap().emails_per_day, 150.0);
    }

    #[test]
    fn reset_restores_default() {
        let medium = MemoryMedium::new();
        let mut session = session(&medium);
        session.replace(ActivityProfile::ZERO).unwrap();
        assert_eq!(session.impact(), ImpactBreakdown::ZERO);
        session.reset().unwrap();
        assert!((session.impact().total_impact - 90.08).abs() < 0.01);
    }

    #[test]
    fn insights_follow_profile() {
        let medium = MemoryMedium::new();
        let mut session = session(&medium);
        let insights = session.insights();
        assert_eq!(insights.trees_to_offset, 2);
        assert!((insights.forest_guardian_progress - 90.08).abs() < 0.01);
    }

    #[test]
    fn early_access_goes_through_store() {
        let medium = MemoryMedium::new();
        let session = session(&medium);
        let request = session.join_early_access("Ada", "ada@example.com").unwrap();
        assert_eq!(session.early_access_requests(), vec![request]);
        assert_eq!(session.achievements(), Achievement::defaults());
    }
}
