use crate::config::Config;
use std::env::VarError;
use std::error::Error;

static ENV_PREFIX: &str = "RELATION_FIXTURE";

/// Reads dotted keys from `RELATION_FIXTURE_*` environment variables,
/// e.g. `fixture.path` from `RELATION_FIXTURE_PATH`.
pub struct EnvConfig {}

impl EnvConfig {
    pub fn new() -> Self {
        Self {}
    }

    fn variable_name(key: &str) -> String {
        let key = key.to_uppercase().replace('.', "_");
        let key = key.strip_prefix("FIXTURE_").unwrap_or(&key);
        format!("{}_{}", ENV_PREFIX, key)
    }
}

impl Config for EnvConfig {
    fn read(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let value = match std::env::var(Self::variable_name(key)) {
            Ok(value) => value.trim().to_string(),
            Err(VarError::NotPresent) => return Ok(None),
            Err(VarError::NotUnicode(_)) => {
                return Err(format!("non-unicode value for {}", key).into());
            }
        };

        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }
}

#[test]
fn test_variable_name() {
    assert_eq!(EnvConfig::variable_name("fixture.path"), "RELATION_FIXTURE_PATH");
    assert_eq!(
        EnvConfig::variable_name("fixture.default_rid"),
        "RELATION_FIXTURE_DEFAULT_RID"
    );
    assert_eq!(EnvConfig::variable_name("log"), "RELATION_FIXTURE_LOG");
}

#[test]
fn test_env_config() {
    let expected_value = "/tmp/relation.json";
    unsafe {
        std::env::set_var("RELATION_FIXTURE_SOME_KEY", format!("  {}\n", expected_value));
        std::env::set_var("RELATION_FIXTURE_BLANK_KEY", "   ");
    }

    let config = EnvConfig::new();

    let value = config.read("fixture.some.key").expect("failed to read config");
    assert_eq!(value, Some(expected_value.to_string()));

    let value = config.read("some.key").expect("failed to read config");
    assert_eq!(value, Some(expected_value.to_string()));

    let value = config.read("blank.key").expect("failed to read config");
    assert_eq!(value, None);

    let value = config.read("another.key").expect("failed to read config");
    assert_eq!(value, None);

    unsafe {
        std::env::remove_var("RELATION_FIXTURE_SOME_KEY");
        std::env::remove_var("RELATION_FIXTURE_BLANK_KEY");
    }
}
