use crate::config::Config;
use std::collections::HashMap;
use std::error::Error;

/// In-memory settings keyed by the same dotted keys `EnvConfig` reads.
/// Blank values read as unset, as they do from the environment.
pub struct MockConfig {
    settings: HashMap<String, String>,
}

impl MockConfig {
    pub fn new() -> Self {
        Self {
            settings: HashMap::new(),
        }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |config, (key, value)| config.with(key, value))
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.settings.insert(key.to_string(), value.to_string());
        self
    }
}

impl Config for MockConfig {
    fn read(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let value = self
            .settings
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty());
        Ok(value.map(str::to_string))
    }
}

#[test]
fn test_mock_config() {
    let config =
        MockConfig::from_pairs(&[("fixture.path", " /tmp/relation.json "), ("fixture.log", "")])
            .with("fixture.default_rid", "db:1");

    let value = config.read("fixture.path").expect("failed to read config");
    assert_eq!(value, Some("/tmp/relation.json".to_string()));

    let value = config.read("fixture.default_rid").expect("failed to read config");
    assert_eq!(value, Some("db:1".to_string()));

    let value = config.read("fixture.log").expect("failed to read config");
    assert_eq!(value, None);

    let value = config.read("fixture.missing").expect("failed to read config");
    assert_eq!(value, None);
}
