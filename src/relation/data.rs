use super::error::FixtureError;
use super::{Relations, Settings, Units};
use log::{debug, info};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

static ROOT_PATH: &str = "$";

/// Relation fixture data in one of its two shapes.
///
/// `Flat` holds the settings of the implicit default relation and unit,
/// `Nested` holds every relation keyed by relation id and then unit id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationData {
    Flat(Settings),
    Nested(Relations),
}

impl RelationData {
    pub fn keys(&self) -> BTreeSet<String> {
        match self {
            Self::Flat(settings) => settings.keys().cloned().collect(),
            Self::Nested(relations) => relations.keys().cloned().collect(),
        }
    }

    pub fn units(&self, relation_id: &str) -> Option<&Units> {
        match self {
            Self::Flat(_) => None,
            Self::Nested(relations) => relations.get(relation_id),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| FixtureError::Parse(e.to_string()))?;
        Self::from_json(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FixtureError> {
        let value: Value =
            serde_json::from_reader(reader).map_err(|e| FixtureError::Parse(e.to_string()))?;
        Self::from_json(value)
    }

    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        info!("loading relation fixture from {}", path.display());
        let file = File::open(path).map_err(|e| FixtureError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Detects the shape from the top-level values: all strings is flat,
    /// all objects is nested. An empty object is flat.
    pub fn from_json(value: Value) -> Result<Self, FixtureError> {
        let object = expect_object(value, ROOT_PATH)?;

        if object.values().all(Value::is_string) {
            debug!("fixture has flat shape with {} attributes", object.len());
            return Ok(Self::Flat(settings_from_object(object, "")?));
        }
        if object.values().all(Value::is_object) {
            debug!("fixture has nested shape with {} relations", object.len());
            return Ok(Self::Nested(relations_from_object(object)?));
        }

        Err(FixtureError::Shape {
            path: ROOT_PATH.to_string(),
            expected: "only attributes or only relations",
            found: "a mix of both".to_string(),
        })
    }
}

impl From<Settings> for RelationData {
    fn from(settings: Settings) -> Self {
        Self::Flat(settings)
    }
}

impl From<Relations> for RelationData {
    fn from(relations: Relations) -> Self {
        Self::Nested(relations)
    }
}

fn relations_from_object(object: Map<String, Value>) -> Result<Relations, FixtureError> {
    let mut relations = Relations::new();
    for (relation_id, units) in object {
        let units = expect_object(units, &relation_id)?;
        let mut parsed = Units::new();
        for (unit, settings) in units {
            let path = join_path(&relation_id, &unit);
            let settings = expect_object(settings, &path)?;
            parsed.insert(unit, settings_from_object(settings, &path)?);
        }
        relations.insert(relation_id, parsed);
    }
    Ok(relations)
}

fn settings_from_object(object: Map<String, Value>, path: &str) -> Result<Settings, FixtureError> {
    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(value) => Ok((key, value)),
            other => Err(FixtureError::Shape {
                path: join_path(path, &key),
                expected: "a string",
                found: other.to_string(),
            }),
        })
        .collect()
}

fn expect_object(value: Value, path: &str) -> Result<Map<String, Value>, FixtureError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(FixtureError::Shape {
            path: path.to_string(),
            expected: "an object",
            found: other.to_string(),
        }),
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

#[test]
fn test_from_json_str_shapes() {
    let flat = RelationData::from_json_str(r#"{"private-address": "foo", "password": "passwd"}"#)
        .expect("flat fixture should parse");
    assert_eq!(
        flat,
        RelationData::Flat(Settings::from([
            ("private-address".to_string(), "foo".to_string()),
            ("password".to_string(), "passwd".to_string()),
        ]))
    );

    let nested = RelationData::from_json_str(
        r#"{"mysql:0": {"mysql/0": {"private-address": "foo", "password": "passwd"}}}"#,
    )
    .expect("nested fixture should parse");
    assert_eq!(nested.keys(), BTreeSet::from(["mysql:0".to_string()]));
    let units = nested.units("mysql:0").expect("relation should exist");
    assert_eq!(units["mysql/0"]["password"], "passwd");

    let empty = RelationData::from_json_str("{}").expect("empty fixture should parse");
    assert_eq!(empty, RelationData::Flat(Settings::new()));

    // relations without units are still nested
    let no_units = RelationData::from_json_str(r#"{"db:1": {}}"#).expect("should parse");
    assert_eq!(no_units.units("db:1"), Some(&Units::new()));
}

#[test]
fn test_from_json_str_rejects_malformed() {
    let err = RelationData::from_json_str("[1, 2]").expect_err("array should fail");
    assert_eq!(
        err,
        FixtureError::Shape {
            path: "$".to_string(),
            expected: "an object",
            found: "[1,2]".to_string(),
        }
    );

    let err = RelationData::from_json_str(r#"{"password": "passwd", "mysql:0": {}}"#)
        .expect_err("mixed shape should fail");
    assert!(matches!(err, FixtureError::Shape { path, .. } if path == "$"));

    let err = RelationData::from_json_str(r#"{"port": 3306}"#).expect_err("number should fail");
    assert!(matches!(err, FixtureError::Shape { .. }));

    let err = RelationData::from_json_str(r#"{"mysql:0": {"mysql/0": "foo"}}"#)
        .expect_err("unit without settings should fail");
    assert_eq!(
        err,
        FixtureError::Shape {
            path: "mysql:0.mysql/0".to_string(),
            expected: "an object",
            found: "\"foo\"".to_string(),
        }
    );

    let err = RelationData::from_json_str(r#"{"mysql:0": {"mysql/0": {"port": 3306}}}"#)
        .expect_err("non-string attribute should fail");
    assert_eq!(
        err,
        FixtureError::Shape {
            path: "mysql:0.mysql/0.port".to_string(),
            expected: "a string",
            found: "3306".to_string(),
        }
    );

    let err = RelationData::from_json_str("{").expect_err("truncated json should fail");
    assert!(matches!(err, FixtureError::Parse(_)));
}

#[test]
fn test_from_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(file, r#"{{"password": "passwd"}}"#).expect("failed to write fixture");

    let data = RelationData::from_path(file.path()).expect("failed to load fixture");
    assert_eq!(data.keys(), BTreeSet::from(["password".to_string()]));

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let err = RelationData::from_path(&dir.path().join("missing.json"))
        .expect_err("missing file should fail");
    assert!(matches!(err, FixtureError::Open { path, .. } if path.ends_with("missing.json")));
}
