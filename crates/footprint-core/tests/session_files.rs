//! Sessions over a real data directory, configured from a YAML file.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

use footprint_core::{FootprintConfig, Session};
use footprint_store::{FileMedium, ProfileStore};
use footprint_types::{ActivityField, ActivityProfile};
use tempfile::TempDir;

fn open(config: &FootprintConfig) -> Session<FileMedium> {
    let store = ProfileStore::new(FileMedium::new(&config.storage.data_dir));
    Session::open(store, config.emission_factors)
}

fn config_in(dir: &TempDir, extra: &str) -> FootprintConfig {
    let data_dir = dir.path().join("data");
    let path = dir.path().join("footprint-config.yaml");
    std::fs::write(
        &path,
        format!("storage:\n  data_dir: {:?}\n{extra}", data_dir.display().to_string()),
    )
    .expect("write config");
    let mut config = FootprintConfig::from_file(&path).expect("config parses");
    // Keep the test independent of the caller's environment.
    config.storage.data_dir = data_dir;
    config
}

#[test]
fn session_resumes_after_restart() {
    let dir = TempDir::new().expect("tmp");
    let config = config_in(&dir, "");

    let mut first = open(&config);
    first.set_field(ActivityField::StreamingSd, 3.5).unwrap();
    drop(first);

    let second = open(&config);
    assert_eq!(second.profile().streaming_hours_per_day.sd, 3.5);
    assert!(!second.has_unsaved_changes());
}

#[test]
fn configured_factors_change_the_breakdown_only() {
    let dir = TempDir::new().expect("tmp");
    let config = config_in(&dir, "emission_factors:\n  grams_per_email: 0.3\n");

    let mut session = open(&config);
    assert_eq!(*session.profile(), ActivityProfile::DEFAULT);
    let impact = session.impact();
    assert!((impact.email_impact - 25.0 * 365.0 * 0.3 / 1000.0).abs() < 1e-9);
    assert!((impact.storage_impact - 20.0).abs() < 1e-9);
}
