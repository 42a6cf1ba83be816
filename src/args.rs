use std::error::Error;
use std::fmt;
use std::path::Path;

use relation_fixture::relation::id::{validate_relation_id, validate_unit_id};

const ALL_ATTRIBUTES: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    UnknownTool(String),
    UnknownOption(String),
    MissingValue(String),
    ArgCount(usize, usize),
    InvalidRelationId(String),
    InvalidUnit(String),
    InvalidFormat(String),
    MissingRelationId,
}

impl Error for ArgsError {}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTool(tool) => write!(f, "unknown tool: {:?}", tool),
            Self::UnknownOption(option) => write!(f, "unknown option: {:?}", option),
            Self::MissingValue(option) => write!(f, "missing value for option: {:?}", option),
            Self::ArgCount(count, allowed) => write!(
                f,
                "unexpected number of arguments: {} (allowed: at most {})",
                count, allowed
            ),
            Self::InvalidRelationId(relation_id) => {
                write!(f, "invalid relation id: {:?}", relation_id)
            }
            Self::InvalidUnit(unit) => write!(f, "invalid unit: {:?}", unit),
            Self::InvalidFormat(format) => write!(f, "invalid format: {:?}", format),
            Self::MissingRelationId => write!(f, "missing relation id (-r)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    fn from_arg(arg: &str) -> Result<Self, ArgsError> {
        match arg {
            "text" | "smart" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ArgsError::InvalidFormat(arg.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Get {
        attribute: Option<String>,
        unit: Option<String>,
        relation_id: Option<String>,
    },
    Ids {
        relation_name: Option<String>,
    },
    List {
        relation_id: String,
    },
    Related {
        relation_id: Option<String>,
    },
}

#[derive(Debug)]
pub struct Args {
    command: Command,
    format: Format,
}

fn tool_from_arg(arg: &str) -> Option<&str> {
    let executable_name = Path::new(arg).file_name()?.to_str()?;
    match executable_name {
        "relation-get" | "relation-ids" | "relation-list" | "related-units" => {
            Some(executable_name)
        }
        _ => None,
    }
}

#[test]
fn test_tool_from_arg() {
    assert_eq!(tool_from_arg("relation-get"), Some("relation-get"));
    assert_eq!(tool_from_arg("/usr/local/bin/relation-ids"), Some("relation-ids"));
    assert_eq!(tool_from_arg("related-units"), Some("related-units"));
    assert_eq!(tool_from_arg("relation-tool"), None);
    assert_eq!(tool_from_arg("/relation-list/relation-tool"), None);
    assert_eq!(tool_from_arg(""), None);
}

fn relation_id_from_arg(arg: &str) -> Result<String, ArgsError> {
    match validate_relation_id(arg) {
        true => Ok(arg.to_string()),
        false => Err(ArgsError::InvalidRelationId(arg.to_string())),
    }
}

fn unit_from_arg(arg: &str) -> Result<String, ArgsError> {
    match validate_unit_id(arg) {
        true => Ok(arg.to_string()),
        false => Err(ArgsError::InvalidUnit(arg.to_string())),
    }
}

impl Args {
    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Parses the full argv. The tool is taken from the executable name,
    /// or from the first argument when the binary is invoked directly.
    pub fn parse(args: &[String]) -> Result<Self, ArgsError> {
        let executable = args.first().map(String::as_str).unwrap_or_default();
        let (tool, rest) = match tool_from_arg(executable) {
            Some(tool) => (tool, &args[1..]),
            None => match args.get(1) {
                Some(tool) => (tool.as_str(), &args[2..]),
                None => return Err(ArgsError::UnknownTool(String::new())),
            },
        };

        let mut relation_id = None;
        let mut format = Format::Text;
        let mut positional = Vec::new();

        let mut iter = rest.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-r" | "--relation" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue(arg.clone()))?;
                    relation_id = Some(relation_id_from_arg(value)?);
                }
                "--format" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue(arg.clone()))?;
                    format = Format::from_arg(value)?;
                }
                _ if arg.starts_with("--format=") => {
                    format = Format::from_arg(&arg["--format=".len()..])?;
                }
                ALL_ATTRIBUTES => positional.push(arg.clone()),
                _ if arg.starts_with('-') => return Err(ArgsError::UnknownOption(arg.clone())),
                _ => positional.push(arg.clone()),
            }
        }

        let allowed = match tool {
            "relation-get" => 2,
            "relation-ids" => 1,
            "relation-list" | "related-units" => 0,
            _ => return Err(ArgsError::UnknownTool(tool.to_string())),
        };
        if positional.len() > allowed {
            return Err(ArgsError::ArgCount(positional.len(), allowed));
        }
        let mut positional = positional.into_iter();

        let command = match tool {
            "relation-get" => {
                let attribute = positional.next().filter(|attr| attr != ALL_ATTRIBUTES);
                let unit = positional.next().map(|unit| unit_from_arg(&unit)).transpose()?;
                Command::Get {
                    attribute,
                    unit,
                    relation_id,
                }
            }
            "relation-ids" => Command::Ids {
                relation_name: positional.next(),
            },
            "relation-list" => Command::List {
                relation_id: relation_id.ok_or(ArgsError::MissingRelationId)?,
            },
            _ => Command::Related { relation_id },
        };

        Ok(Self { command, format })
    }
}

#[cfg(test)]
fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn test_parse_relation_get() {
    // Case 1: tool from executable name
    let args = Args::parse(&to_args(&["relation-get", "-r", "mysql:0", "password", "mysql/0"]))
        .expect("failed to parse");
    assert_eq!(
        args.command(),
        &Command::Get {
            attribute: Some("password".to_string()),
            unit: Some("mysql/0".to_string()),
            relation_id: Some("mysql:0".to_string()),
        }
    );
    assert_eq!(args.format(), Format::Text);

    // Case 2: tool as first argument, all attributes
    let args = Args::parse(&to_args(&["relation-tool", "relation-get", "--format=json", "-"]))
        .expect("failed to parse");
    assert_eq!(
        args.command(),
        &Command::Get {
            attribute: None,
            unit: None,
            relation_id: None,
        }
    );
    assert_eq!(args.format(), Format::Json);

    // Case 3: bad unit
    let err = Args::parse(&to_args(&["relation-get", "password", "mysql:0"]))
        .expect_err("expected error");
    assert_eq!(err, ArgsError::InvalidUnit("mysql:0".to_string()));

    // Case 4: too many arguments
    let err = Args::parse(&to_args(&["relation-get", "a", "mysql/0", "b"]))
        .expect_err("expected error");
    assert_eq!(err, ArgsError::ArgCount(3, 2));
}

#[test]
fn test_parse_listing_tools() {
    let args = Args::parse(&to_args(&["relation-ids", "db"])).expect("failed to parse");
    assert_eq!(
        args.command(),
        &Command::Ids {
            relation_name: Some("db".to_string())
        }
    );

    let cmd_args = to_args(&["/bin/relation-list", "--relation", "db:2", "--format", "json"]);
    let args = Args::parse(&cmd_args).expect("failed to parse");
    assert_eq!(
        args.command(),
        &Command::List {
            relation_id: "db:2".to_string()
        }
    );
    assert_eq!(args.format(), Format::Json);

    let err = Args::parse(&to_args(&["relation-list"])).expect_err("expected error");
    assert_eq!(err, ArgsError::MissingRelationId);

    let args = Args::parse(&to_args(&["related-units"])).expect("failed to parse");
    assert_eq!(args.command(), &Command::Related { relation_id: None });
}

#[test]
fn test_parse_errors() {
    let err = Args::parse(&to_args(&["relation-tool"])).expect_err("expected error");
    assert_eq!(err, ArgsError::UnknownTool(String::new()));

    let err =
        Args::parse(&to_args(&["relation-tool", "relation-set"])).expect_err("expected error");
    assert_eq!(err, ArgsError::UnknownTool("relation-set".to_string()));

    let err = Args::parse(&to_args(&["relation-ids", "-x"])).expect_err("expected error");
    assert_eq!(err, ArgsError::UnknownOption("-x".to_string()));

    let err = Args::parse(&to_args(&["relation-get", "-r"])).expect_err("expected error");
    assert_eq!(err, ArgsError::MissingValue("-r".to_string()));

    let err = Args::parse(&to_args(&["relation-get", "-r", "mysql"])).expect_err("expected error");
    assert_eq!(err, ArgsError::InvalidRelationId("mysql".to_string()));

    let err =
        Args::parse(&to_args(&["relation-ids", "--format", "yaml"])).expect_err("expected error");
    assert_eq!(err, ArgsError::InvalidFormat("yaml".to_string()));

    let err = Args::parse(&to_args(&["related-units", "mysql:0"])).expect_err("expected error");
    assert_eq!(err, ArgsError::ArgCount(1, 0));
}
