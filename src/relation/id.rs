use regex::Regex;
use std::sync::LazyLock;

static RELATION_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]*:[0-9]+$").expect("failed to create relation id regex")
});
static UNIT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]*/[0-9]+$").expect("failed to create unit id regex")
});

/// `<relation-name>:<number>`, e.g. `mysql:0`.
pub fn validate_relation_id(relation_id: &str) -> bool {
    RELATION_ID_REGEX.is_match(relation_id)
}

/// `<application>/<number>`, e.g. `mysql/0`.
pub fn validate_unit_id(unit: &str) -> bool {
    UNIT_ID_REGEX.is_match(unit)
}

#[test]
fn test_validate_relation_id() {
    for relation_id in ["mysql:0", "foo:0", "shared-db:12", "db2:7"] {
        assert!(validate_relation_id(relation_id), "{}", relation_id);
    }
    for relation_id in ["", "mysql", "mysql:", ":0", "mysql/0", "MySQL:0", "mysql:0:1", "2db:0"] {
        assert!(!validate_relation_id(relation_id), "{}", relation_id);
    }
}

#[test]
fn test_validate_unit_id() {
    for unit in ["mysql/0", "foo/0", "shared-db/12"] {
        assert!(validate_unit_id(unit), "{}", unit);
    }
    for unit in ["", "mysql", "mysql/", "/0", "mysql:0", "mysql/0/1"] {
        assert!(!validate_unit_id(unit), "{}", unit);
    }
}
