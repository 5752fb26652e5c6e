//! The profile store: typed records over a [`DurableMedium`].
//!
//! # Key Patterns
//!
//! | Key | Type | Description |
//! |-----|------|-------------|
//! | `eco_tracker_db_activity` | JSON object | Current activity profile (single record) |
//! | `eco_tracker_db_early_access` | JSON array | Early-access requests in append order |
//! | `eco_tracker_db_achievements` | JSON array | Achievements (read-only, default-seeded) |
//!
//! Reads never fail: an unreadable medium or a record that does not parse
//! is logged and reported as absent (or empty). Writes are serialized by an
//! internal lock and either commit in full or return [`StoreError`].

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use footprint_types::{Achievement, ActivityProfile, EarlyAccessRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::medium::DurableMedium;

/// Fixed logical keys on the durable medium.
pub mod keys {
    /// Current activity profile.
    pub const ACTIVITY: &str = "eco_tracker_db_activity";
    /// Early-access request list.
    pub const EARLY_ACCESS: &str = "eco_tracker_db_early_access";
    /// Achievement list.
    pub const ACHIEVEMENTS: &str = "eco_tracker_db_achievements";
}

/// Source of the current time for request timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Durable home of the activity profile and the early-access log.
///
/// Constructed once by the caller and held for the life of the session.
/// Safe to share between threads when the medium is.
#[derive(Debug)]
pub struct ProfileStore<M> {
    medium: M,
    clock: Clock,
    /// Held across every write so appends never interleave.
    writer: Mutex<()>,
}

impl<M: DurableMedium> ProfileStore<M> {
    /// Create a store over `medium`, stamping requests with the system clock.
    pub fn new(medium: M) -> Self {
        Self::with_clock(medium, Utc::now)
    }

    /// Create a store with an explicit clock.
    pub const fn with_clock(medium: M, clock: Clock) -> Self {
        Self {
            medium,
            clock,
            writer: Mutex::new(()),
        }
    }

    /// The underlying medium.
    pub const fn medium(&self) -> &M {
        &self.medium
    }

    /// Release the store and hand back its medium.
    pub fn into_medium(self) -> M {
        self.medium
    }

    // =========================================================================
    // Activity profile -- eco_tracker_db_activity
    // =========================================================================

    /// Overwrite the current profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if the medium did not
    /// commit. The previously saved profile is still the one returned by
    /// [`load_profile`](Self::load_profile).
    pub fn save_profile(&self, profile: &ActivityProfile) -> Result<(), StoreError> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.write_record(keys::ACTIVITY, profile)?;
        tracing::debug!(key = keys::ACTIVITY, "profile saved");
        Ok(())
    }

    /// The last saved profile, or `None` if nothing usable is stored.
    ///
    /// The caller substitutes [`ActivityProfile::DEFAULT`] for `None`.
    pub fn load_profile(&self) -> Option<ActivityProfile> {
        self.read_record(keys::ACTIVITY)
    }

    // =========================================================================
    // Early access -- eco_tracker_db_early_access
    // =========================================================================

    /// Append a request stamped with the current time and return it.
    ///
    /// The stamp is never earlier than the last stored request's, so list
    /// order and timestamp order agree even if the wall clock steps back.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if the medium did not
    /// commit. The stored list is unchanged in that case.
    pub fn append_early_access_request(
        &self,
        name: &str,
        email: &str,
    ) -> Result<EarlyAccessRequest, StoreError> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut requests = self.list_early_access_requests();
        let now = (self.clock)();
        let timestamp = requests
            .last()
            .map_or(now, |last| now.max(last.timestamp));

        let request = EarlyAccessRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            timestamp,
        };
        requests.push(request.clone());
        self.write_record(keys::EARLY_ACCESS, &requests)?;

        tracing::info!(
            key = keys::EARLY_ACCESS,
            count = requests.len(),
            %timestamp,
            "early-access request appended"
        );
        Ok(request)
    }

    /// Every stored request in append order. Empty if none are stored or
    /// the stored list does not parse.
    pub fn list_early_access_requests(&self) -> Vec<EarlyAccessRequest> {
        self.read_record(keys::EARLY_ACCESS).unwrap_or_default()
    }

    // =========================================================================
    // Achievements -- eco_tracker_db_achievements
    // =========================================================================

    /// Stored achievements, or [`Achievement::defaults`] if none are stored.
    pub fn list_achievements(&self) -> Vec<Achievement> {
        self.read_record(keys::ACHIEVEMENTS)
            .unwrap_or_else(Achievement::defaults)
    }

    // =========================================================================
    // Generic JSON records
    // =========================================================================

    fn write_record<T: Serialize + ?Sized>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.medium.write(key, &json).map_err(|source| {
            tracing::warn!(key, error = %source, "write not committed");
            StoreError::StorageUnavailable { key, source }
        })
    }

    fn read_record<T: DeserializeOwned>(&self, key: &'static str) -> Option<T> {
        let text = match self.medium.read(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(key, %error, "medium unreadable, treating record as absent");
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key, %error, "stored record does not parse, treating as absent");
                None
            }
        }
    }
}
