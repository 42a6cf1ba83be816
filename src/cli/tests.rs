use crate::args::{ArgsError, Command, Format};
use crate::cli::CLI;
use crate::cli::error::CLIError;
use relation_fixture::relation::data::RelationData;
use relation_fixture::relation::error::FixtureError;
use relation_fixture::relation::snapshot::RelationSnapshot;
use relation_fixture::relation::Relations;

const NESTED_FIXTURE: &str = r#"{
    "mysql:0": {
        "mysql/0": {"private-address": "foo", "password": "passwd"},
        "mysql/1": {"private-address": "bar"}
    },
    "cache:1": {}
}"#;

fn nested_snapshot() -> Box<RelationSnapshot> {
    let data = RelationData::from_json_str(NESTED_FIXTURE).expect("failed to parse fixture");
    Box::new(RelationSnapshot::new(data))
}

fn flat_snapshot() -> Box<RelationSnapshot> {
    let data = RelationData::from_json_str(r#"{"private-address": "foo", "password": "passwd"}"#)
        .expect("failed to parse fixture");
    Box::new(RelationSnapshot::new(data))
}

fn get(attribute: Option<&str>, unit: Option<&str>, relation_id: Option<&str>) -> Command {
    Command::Get {
        attribute: attribute.map(str::to_string),
        unit: unit.map(str::to_string),
        relation_id: relation_id.map(str::to_string),
    }
}

fn ids(relation_name: Option<&str>) -> Command {
    Command::Ids {
        relation_name: relation_name.map(str::to_string),
    }
}

fn list(relation_id: &str) -> Command {
    Command::List {
        relation_id: relation_id.to_string(),
    }
}

fn related(relation_id: Option<&str>) -> Command {
    Command::Related {
        relation_id: relation_id.map(str::to_string),
    }
}

#[test]
fn relation_get_text() {
    // Case 1: single attribute
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    cli.run(&get(Some("password"), Some("mysql/0"), Some("mysql:0")))
        .expect("failed to run cli");
    assert_eq!(stdout, b"passwd\n");

    // Case 2: missing attribute prints nothing
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    cli.run(&get(Some("password"), Some("mysql/1"), Some("mysql:0")))
        .expect("failed to run cli");
    assert_eq!(stdout, b"");

    // Case 3: all settings of the default relation
    let mut stdout = Vec::new();
    let mut cli = CLI::new(flat_snapshot(), &mut stdout, Format::Text);
    cli.run(&get(None, None, None)).expect("failed to run cli");
    assert_eq!(stdout, b"password: passwd\nprivate-address: foo\n");
}

#[test]
fn relation_get_nested_through_default() {
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    cli.run(&get(None, None, Some("foo:0"))).expect("failed to run cli");
    assert_eq!(
        String::from_utf8(stdout).expect("invalid utf-8"),
        "cache:1:\n\
         mysql:0:\n  \
         mysql/0:\n    \
         password: passwd\n    \
         private-address: foo\n  \
         mysql/1:\n    \
         private-address: bar\n"
    );

    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    cli.run(&get(Some("mysql:0"), None, None)).expect("failed to run cli");
    assert_eq!(
        String::from_utf8(stdout).expect("invalid utf-8"),
        "mysql/0:\n  password: passwd\n  private-address: foo\nmysql/1:\n  private-address: bar\n"
    );
}

#[test]
fn relation_get_json() {
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Json);
    cli.run(&get(Some("password"), Some("mysql/0"), Some("mysql:0")))
        .expect("failed to run cli");
    assert_eq!(stdout, b"\"passwd\"\n");

    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Json);
    cli.run(&get(None, Some("mysql/0"), Some("mysql:0"))).expect("failed to run cli");
    assert_eq!(stdout, b"null\n");

    let mut stdout = Vec::new();
    let mut cli = CLI::new(flat_snapshot(), &mut stdout, Format::Json);
    cli.run(&get(None, None, None)).expect("failed to run cli");
    assert_eq!(stdout, b"{\"password\":\"passwd\",\"private-address\":\"foo\"}\n");
}

#[test]
fn relation_ids() {
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    cli.run(&ids(Some("db"))).expect("failed to run cli");
    assert_eq!(stdout, b"cache:1\nmysql:0\n");

    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Json);
    cli.run(&ids(None)).expect("failed to run cli");
    assert_eq!(stdout, b"[\"cache:1\",\"mysql:0\"]\n");
}

#[test]
fn relation_list() {
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    cli.run(&list("mysql:0")).expect("failed to run cli");
    assert_eq!(stdout, b"mysql/0\nmysql/1\n");

    // known relation without units
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Json);
    cli.run(&list("cache:1")).expect("failed to run cli");
    assert_eq!(stdout, b"[]\n");

    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    let err = cli.run(&list("pgsql:0")).expect_err("expected error");
    assert!(matches!(err, CLIError::RelationNotFound(relation_id) if relation_id == "pgsql:0"));
    assert_eq!(stdout, b"");
}

#[test]
fn related_units() {
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Text);
    cli.run(&related(Some("mysql:0"))).expect("failed to run cli");
    assert_eq!(stdout, b"mysql/0\nmysql/1\n");

    // unknown relation is just empty
    let mut stdout = Vec::new();
    let mut cli = CLI::new(nested_snapshot(), &mut stdout, Format::Json);
    cli.run(&related(Some("pgsql:0"))).expect("failed to run cli");
    assert_eq!(stdout, b"[]\n");
}

#[test]
fn empty_fixture() {
    let mut stdout = Vec::new();
    let snapshot = RelationSnapshot::new(Relations::new());
    let mut cli = CLI::new(Box::new(snapshot), &mut stdout, Format::Json);
    cli.run(&get(Some("password"), None, None)).expect("failed to run cli");
    cli.run(&ids(None)).expect("failed to run cli");
    assert_eq!(stdout, b"null\n[]\n");
}

#[test]
fn error_conversions() {
    let err: CLIError = FixtureError::MissingSetting("fixture.path".to_string()).into();
    assert_eq!(err.to_string(), "fixture error: setting fixture.path is not set");

    let err: CLIError = ArgsError::MissingRelationId.into();
    assert_eq!(err.to_string(), "argument error: missing relation id (-r)");
}
