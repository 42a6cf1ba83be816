use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Why a fixture could not be built. Lookups on a built snapshot never fail.
#[derive(Debug, PartialEq, Clone)]
pub enum FixtureError {
    /// The fixture is not valid JSON.
    Parse(String),
    /// A JSON value has the wrong type; `path` is dotted, `$` is the root.
    Shape {
        path: String,
        expected: &'static str,
        found: String,
    },
    Open {
        path: PathBuf,
        reason: String,
    },
    MissingSetting(String),
    InvalidSetting {
        key: String,
        value: String,
    },
    SettingUnreadable {
        key: String,
        reason: String,
    },
}

impl Error for FixtureError {}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(reason) => write!(f, "malformed fixture json: {}", reason),
            Self::Shape {
                path,
                expected,
                found,
            } => write!(f, "fixture entry {} should be {}, found {}", path, expected, found),
            Self::Open { path, reason } => {
                write!(f, "cannot open fixture {}: {}", path.display(), reason)
            }
            Self::MissingSetting(key) => write!(f, "setting {} is not set", key),
            Self::InvalidSetting { key, value } => {
                write!(f, "setting {} has invalid value {:?}", key, value)
            }
            Self::SettingUnreadable { key, reason } => {
                write!(f, "cannot read setting {}: {}", key, reason)
            }
        }
    }
}

#[test]
fn test_display() {
    let err = FixtureError::Shape {
        path: "mysql:0.mysql/0".to_string(),
        expected: "an object",
        found: "\"foo\"".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "fixture entry mysql:0.mysql/0 should be an object, found \"foo\""
    );

    let err = FixtureError::MissingSetting("fixture.path".to_string());
    assert_eq!(err.to_string(), "setting fixture.path is not set");

    let err = FixtureError::Open {
        path: PathBuf::from("/nowhere/relation.json"),
        reason: "not found".to_string(),
    };
    assert_eq!(err.to_string(), "cannot open fixture /nowhere/relation.json: not found");
}
