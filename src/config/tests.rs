use crate::config::fixture::FixtureConfig;
use crate::config::mock::MockConfig;
use crate::config::Config;
use crate::relation::error::FixtureError;
use crate::relation::snapshot::RelationSnapshot;
use crate::relation::{RelationSource, RelationValue};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

struct FailingConfig {}

impl Config for FailingConfig {
    fn read(&self, _key: &str) -> Result<Option<String>, Box<dyn Error>> {
        Err("backend unavailable".into())
    }
}

#[test]
fn default_relation_id() {
    // default
    let config = FixtureConfig::new(Box::new(MockConfig::new()));
    let relation_id = config.get_default_relation_id().expect("failed to get relation id");
    assert_eq!(relation_id, "foo:0");

    // override
    let mock_config = MockConfig::new().with("fixture.default_rid", "db:1");
    let config = FixtureConfig::new(Box::new(mock_config));
    let relation_id = config.get_default_relation_id().expect("failed to get relation id");
    assert_eq!(relation_id, "db:1");

    // invalid
    let mock_config = MockConfig::new().with("fixture.default_rid", "db/1");
    let config = FixtureConfig::new(Box::new(mock_config));
    let err = config.get_default_relation_id().expect_err("should fail");
    assert_eq!(
        err,
        FixtureError::InvalidSetting {
            key: "fixture.default_rid".to_string(),
            value: "db/1".to_string(),
        }
    );
}

#[test]
fn fixture_path() {
    let config = FixtureConfig::new(Box::new(MockConfig::new()));
    let err = config.get_fixture_path().expect_err("should fail");
    assert_eq!(err, FixtureError::MissingSetting("fixture.path".to_string()));

    let mock_config = MockConfig::new().with("fixture.path", "/tmp/relation.json");
    let config = FixtureConfig::new(Box::new(mock_config));
    let path = config.get_fixture_path().expect("failed to get path");
    assert_eq!(path, PathBuf::from("/tmp/relation.json"));
}

#[test]
fn log_spec() {
    let config = FixtureConfig::new(Box::new(MockConfig::new()));
    assert_eq!(config.get_log_spec().expect("failed to get log spec"), "info");

    let mock_config = MockConfig::new().with("fixture.log", "relation_fixture=trace");
    let config = FixtureConfig::new(Box::new(mock_config));
    assert_eq!(
        config.get_log_spec().expect("failed to get log spec"),
        "relation_fixture=trace"
    );
}

#[test]
fn failing_backend() {
    let config = FixtureConfig::new(Box::new(FailingConfig {}));
    let err = config.get_default_relation_id().expect_err("should fail");
    assert_eq!(
        err,
        FixtureError::SettingUnreadable {
            key: "fixture.default_rid".to_string(),
            reason: "backend unavailable".to_string(),
        }
    );
}

#[test]
fn snapshot_from_config() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(file, r#"{{"password": "passwd"}}"#).expect("failed to write fixture");
    let path = file.path().display().to_string();

    let mock_config = MockConfig::new()
        .with("fixture.path", &path)
        .with("fixture.default_rid", "db:1");
    let config = FixtureConfig::new(Box::new(mock_config));
    let snapshot = RelationSnapshot::from_config(&config).expect("failed to load snapshot");

    assert_eq!(snapshot.default_relation_id(), "db:1");
    assert_eq!(
        snapshot.get(Some("password"), None, Some("db:1")),
        Some(RelationValue::from("passwd"))
    );

    let config = FixtureConfig::new(Box::new(MockConfig::new()));
    RelationSnapshot::from_config(&config).expect_err("should fail without a path");
}
