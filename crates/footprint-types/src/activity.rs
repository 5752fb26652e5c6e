//! The activity profile: a user's self-reported daily digital usage.
//!
//! Field names on the wire follow the presentation layer (`emailsPerDay`,
//! `streamingHoursPerDay`, `cloudStorageGB`). Deserialization is lenient:
//! every numeric field that is missing, `null`, or not a number reads as
//! `0`, and unknown fields are ignored. Only a top-level value that is not
//! an object fails to deserialize.

use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Wire keys
// ---------------------------------------------------------------------------

const KEY_EMAILS: &str = "emailsPerDay";
const KEY_STREAMING: &str = "streamingHoursPerDay";
const KEY_STORAGE: &str = "cloudStorageGB";
const KEY_SD: &str = "sd";
const KEY_HD: &str = "hd";
const KEY_ULTRA: &str = "ultra";

/// Read a numeric field, substituting `0` for anything that is not a number.
fn lenient_number(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// StreamingHours
// ---------------------------------------------------------------------------

/// Daily streaming hours split by video quality tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StreamingHours {
    /// Hours per day of standard-definition video.
    pub sd: f64,
    /// Hours per day of high-definition video.
    pub hd: f64,
    /// Hours per day of ultra-high-definition (4K) video.
    pub ultra: f64,
}

impl StreamingHours {
    /// No streaming at any tier.
    pub const ZERO: Self = Self {
        sd: 0.0,
        hd: 0.0,
        ultra: 0.0,
    };

    /// Build from an arbitrary JSON value. Anything other than an object
    /// yields [`StreamingHours::ZERO`].
    pub fn from_value_lenient(value: &Value) -> Self {
        value.as_object().map_or(Self::ZERO, Self::from_map)
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            sd: lenient_number(map, KEY_SD),
            hd: lenient_number(map, KEY_HD),
            ultra: lenient_number(map, KEY_ULTRA),
        }
    }
}

impl<'de> Deserialize<'de> for StreamingHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

// ---------------------------------------------------------------------------
// ActivityProfile
// ---------------------------------------------------------------------------

/// A user's daily digital-activity snapshot.
///
/// The caller owns this value for the duration of a session and replaces
/// it wholesale on every change. The store keeps exactly one durable copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ActivityProfile {
    /// Emails sent and received per day.
    pub emails_per_day: f64,
    /// Video streaming hours per day by quality tier.
    pub streaming_hours_per_day: StreamingHours,
    /// Total gigabytes held in cloud storage.
    #[serde(rename = "cloudStorageGB")]
    pub cloud_storage_gb: f64,
}

impl ActivityProfile {
    /// The profile used when nothing has been persisted yet.
    pub const DEFAULT: Self = Self {
        emails_per_day: 25.0,
        streaming_hours_per_day: StreamingHours {
            sd: 1.0,
            hd: 2.0,
            ultra: 0.0,
        },
        cloud_storage_gb: 100.0,
    };

    /// A profile with every field at zero.
    pub const ZERO: Self = Self {
        emails_per_day: 0.0,
        streaming_hours_per_day: StreamingHours::ZERO,
        cloud_storage_gb: 0.0,
    };

    /// Build a profile from any JSON value shaped like one.
    ///
    /// Never fails. A non-object value produces [`ActivityProfile::ZERO`];
    /// missing or mistyped fields read as `0`.
    pub fn from_value_lenient(value: &Value) -> Self {
        value.as_object().map_or(Self::ZERO, Self::from_map)
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            emails_per_day: lenient_number(map, KEY_EMAILS),
            streaming_hours_per_day: map
                .get(KEY_STREAMING)
                .map_or(StreamingHours::ZERO, StreamingHours::from_value_lenient),
            cloud_storage_gb: lenient_number(map, KEY_STORAGE),
        }
    }

    /// Read one field.
    pub const fn get(&self, field: ActivityField) -> f64 {
        match field {
            ActivityField::EmailsPerDay => self.emails_per_day,
            ActivityField::StreamingSd => self.streaming_hours_per_day.sd,
            ActivityField::StreamingHd => self.streaming_hours_per_day.hd,
            ActivityField::StreamingUltra => self.streaming_hours_per_day.ultra,
            ActivityField::CloudStorageGb => self.cloud_storage_gb,
        }
    }

    /// Overwrite one field, leaving the others untouched.
    pub const fn set(&mut self, field: ActivityField, value: f64) {
        match field {
            ActivityField::EmailsPerDay => self.emails_per_day = value,
            ActivityField::StreamingSd => self.streaming_hours_per_day.sd = value,
            ActivityField::StreamingHd => self.streaming_hours_per_day.hd = value,
            ActivityField::StreamingUltra => self.streaming_hours_per_day.ultra = value,
            ActivityField::CloudStorageGb => self.cloud_storage_gb = value,
        }
    }

    /// Return a copy with one field replaced.
    #[must_use]
    pub const fn with(mut self, field: ActivityField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

impl Default for ActivityProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for ActivityProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

// ---------------------------------------------------------------------------
// ActivityField
// ---------------------------------------------------------------------------

/// One of the five numeric inputs of an [`ActivityProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ActivityField {
    /// `emailsPerDay`
    EmailsPerDay,
    /// `streamingHoursPerDay.sd`
    StreamingSd,
    /// `streamingHoursPerDay.hd`
    StreamingHd,
    /// `streamingHoursPerDay.ultra`
    StreamingUltra,
    /// `cloudStorageGB`
    CloudStorageGb,
}

/// Input range for a field as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FieldBounds {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest value offered by the input control.
    pub max: f64,
    /// Increment of the input control.
    pub step: f64,
}

impl ActivityField {
    /// Every field, in display order.
    pub const ALL: [Self; 5] = [
        Self::EmailsPerDay,
        Self::CloudStorageGb,
        Self::StreamingSd,
        Self::StreamingHd,
        Self::StreamingUltra,
    ];

    /// Dotted wire path of the field, e.g. `streamingHoursPerDay.hd`.
    pub const fn path(self) -> &'static str {
        match self {
            Self::EmailsPerDay => "emailsPerDay",
            Self::StreamingSd => "streamingHoursPerDay.sd",
            Self::StreamingHd => "streamingHoursPerDay.hd",
            Self::StreamingUltra => "streamingHoursPerDay.ultra",
            Self::CloudStorageGb => "cloudStorageGB",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmailsPerDay => "Emails per Day",
            Self::StreamingSd => "Standard (SD)",
            Self::StreamingHd => "High (HD)",
            Self::StreamingUltra => "Ultra (4K)",
            Self::CloudStorageGb => "Total Usage (GB)",
        }
    }

    /// Slider range for the field.
    pub const fn bounds(self) -> FieldBounds {
        match self {
            Self::EmailsPerDay => FieldBounds {
                min: 0.0,
                max: 200.0,
                step: 1.0,
            },
            Self::CloudStorageGb => FieldBounds {
                min: 0.0,
                max: 2000.0,
                step: 10.0,
            },
            Self::StreamingSd | Self::StreamingHd | Self::StreamingUltra => FieldBounds {
                min: 0.0,
                max: 24.0,
                step: 0.5,
            },
        }
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Error returned when a string names no [`ActivityField`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ActivityField {
    type Err = UnknownField;

    /// Accepts the dotted wire path or a short alias
    /// (`emails`, `sd`, `hd`, `ultra`, `storage`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emailsPerDay" | "emails" => Ok(Self::EmailsPerDay),
            "streamingHoursPerDay.sd" | "sd" => Ok(Self::StreamingSd),
            "streamingHoursPerDay.hd" | "hd" => Ok(Self::StreamingHd),
            "streamingHoursPerDay.ultra" | "ultra" => Ok(Self::StreamingUltra),
            "cloudStorageGB" | "storage" => Ok(Self::CloudStorageGb),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_names() {
        let value = serde_json::to_value(ActivityProfile::DEFAULT).unwrap();
        assert_eq!(
            value,
            json!({
                "emailsPerDay": 25.0,
                "streamingHoursPerDay": { "sd": 1.0, "hd": 2.0, "ultra": 0.0 },
                "cloudStorageGB": 100.0
            })
        );
    }

    #[test]
    fn json_roundtrip_preserves_profile() {
        let profile = ActivityProfile::DEFAULT
            .with(ActivityField::StreamingUltra, 1.5)
            .with(ActivityField::CloudStorageGb, 640.0);
        let text = serde_json::to_string(&profile).unwrap();
        let back: ActivityProfile = serde_json::from_str(&text).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn missing_and_mistyped_fields_read_as_zero() {
        let back: ActivityProfile = serde_json::from_str(
            r#"{"emailsPerDay":"lots","streamingHoursPerDay":{"hd":3},"extra":true}"#,
        )
        .unwrap();
        assert_eq!(back.emails_per_day, 0.0);
        assert_eq!(back.streaming_hours_per_day.sd, 0.0);
        assert_eq!(back.streaming_hours_per_day.hd, 3.0);
        assert_eq!(back.cloud_storage_gb, 0.0);
    }

    #[test]
    fn non_object_streaming_reads_as_zero() {
        let back: ActivityProfile =
            serde_json::from_str(r#"{"emailsPerDay":4,"streamingHoursPerDay":null}"#).unwrap();
        assert_eq!(back.emails_per_day, 4.0);
        assert_eq!(back.streaming_hours_per_day, StreamingHours::ZERO);
    }

    #[test]
    fn non_object_profile_fails_to_deserialize() {
        assert!(serde_json::from_str::<ActivityProfile>("42").is_err());
        assert!(serde_json::from_str::<ActivityProfile>("[1,2]").is_err());
    }

    #[test]
    fn lenient_value_accepts_anything() {
        assert_eq!(
            ActivityProfile::from_value_lenient(&json!(null)),
            ActivityProfile::ZERO
        );
        assert_eq!(
            ActivityProfile::from_value_lenient(&json!({"cloudStorageGB": 12})).cloud_storage_gb,
            12.0
        );
    }

    #[test]
    fn field_accessors_cover_every_field() {
        let mut profile = ActivityProfile::ZERO;
        for (i, field) in ActivityField::ALL.into_iter().enumerate() {
            let value = f64::from(u8::try_from(i).unwrap()) + 1.0;
            profile.set(field, value);
            assert_eq!(profile.get(field), value);
        }
        assert_eq!(profile.emails_per_day, 1.0);
        assert_eq!(profile.cloud_storage_gb, 2.0);
        assert_eq!(profile.streaming_hours_per_day.ultra, 5.0);
    }

    #[test]
    fn field_parses_paths_and_aliases() {
        for field in ActivityField::ALL {
            assert_eq!(field.path().parse::<ActivityField>().unwrap(), field);
        }
        assert_eq!("hd".parse::<ActivityField>().unwrap(), ActivityField::StreamingHd);
        assert!("bandwidth".parse::<ActivityField>().is_err());
    }

    #[test]
    fn unknown_field_reports_the_name() {
        let err = "bandwidth".parse::<ActivityField>().unwrap_err();
        assert_eq!(err, UnknownField("bandwidth".to_owned()));
        assert_eq!(err.to_string(), "unknown activity field: bandwidth");
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn streaming_bounds_allow_half_hours() {
        let bounds = ActivityField::StreamingUltra.bounds();
        assert_eq!(bounds.max, 24.0);
        assert_eq!(bounds.step, 0.5);
    }
}
