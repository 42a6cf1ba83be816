use crate::args::ArgsError;
use relation_fixture::relation::error::FixtureError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CLIError {
    Args(ArgsError),
    Fixture(FixtureError),
    RelationNotFound(String),
    Serialization(serde_json::Error),
    InputOutput(std::io::Error),
}

impl Error for CLIError {}

impl std::fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::Args(e) => write!(f, "argument error: {}", e),
            CLIError::Fixture(e) => write!(f, "fixture error: {}", e),
            CLIError::RelationNotFound(relation_id) => {
                write!(f, "relation not found: {:?}", relation_id)
            }
            CLIError::Serialization(e) => write!(f, "serialization error: {}", e),
            CLIError::InputOutput(e) => write!(f, "input/output error: {}", e),
        }
    }
}

impl From<std::io::Error> for CLIError {
    fn from(e: std::io::Error) -> Self {
        CLIError::InputOutput(e)
    }
}

impl From<ArgsError> for CLIError {
    fn from(e: ArgsError) -> Self {
        CLIError::Args(e)
    }
}

impl From<FixtureError> for CLIError {
    fn from(e: FixtureError) -> Self {
        CLIError::Fixture(e)
    }
}

impl From<serde_json::Error> for CLIError {
    fn from(e: serde_json::Error) -> Self {
        CLIError::Serialization(e)
    }
}
