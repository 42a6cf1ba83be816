use crate::config::Config;
use crate::relation::error::FixtureError;
use crate::relation::id::validate_relation_id;
use crate::relation::snapshot::DEFAULT_RELATION_ID;
use std::path::PathBuf;

static CONFIG_PREFIX: &str = "fixture";
static DEFAULT_LOG_SPEC: &str = "info";

/// Settings for loading a relation fixture, read through any [`Config`].
pub struct FixtureConfig {
    config: Box<dyn Config>,
}

impl FixtureConfig {
    pub fn new(config: Box<dyn Config>) -> Self {
        Self { config }
    }

    fn key(name: &str) -> String {
        format!("{}.{}", CONFIG_PREFIX, name)
    }

    fn read(&self, name: &str) -> Result<Option<String>, FixtureError> {
        let key = Self::key(name);
        self.config
            .read(&key)
            .map_err(|e| FixtureError::SettingUnreadable {
                reason: e.to_string(),
                key,
            })
    }

    pub fn get_default_relation_id(&self) -> Result<String, FixtureError> {
        match self.read("default_rid")? {
            Some(relation_id) if validate_relation_id(&relation_id) => Ok(relation_id),
            Some(relation_id) => Err(FixtureError::InvalidSetting {
                key: Self::key("default_rid"),
                value: relation_id,
            }),
            None => Ok(DEFAULT_RELATION_ID.to_string()),
        }
    }

    pub fn get_fixture_path(&self) -> Result<PathBuf, FixtureError> {
        match self.read("path")? {
            Some(path) => Ok(PathBuf::from(path)),
            None => Err(FixtureError::MissingSetting(Self::key("path"))),
        }
    }

    pub fn get_log_spec(&self) -> Result<String, FixtureError> {
        Ok(self
            .read("log")?
            .unwrap_or_else(|| DEFAULT_LOG_SPEC.to_string()))
    }
}
