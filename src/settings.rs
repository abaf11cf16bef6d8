use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_OUTPUT_PATH: &str = "faculty_data_all_depts.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "faculty_scraper/0.1";

/// Run settings. Every field has a fixed default; `FACULTY_*` environment
/// variables may override them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output_path: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_env(config::Environment::with_prefix("FACULTY"))
    }

    fn from_env(env: config::Environment) -> Self {
        let loaded: Result<Settings, ConfigError> = Config::builder()
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize());
        match loaded {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Invalid FACULTY_* settings, using defaults");
                Settings::default()
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let s = Settings::default();
        assert_eq!(s.output_path, "faculty_data_all_depts.csv");
        assert_eq!(s.timeout(), Duration::from_secs(10));
    }

    fn env_from(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("FACULTY").source(Some(source))
    }

    #[test]
    fn no_overrides_gives_defaults() {
        let s = Settings::from_env(env_from(&[]));
        assert_eq!(s.output_path, DEFAULT_OUTPUT_PATH);
        assert_eq!(s.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn valid_overrides_applied() {
        let s = Settings::from_env(env_from(&[
            ("FACULTY_OUTPUT_PATH", "out.csv"),
            ("FACULTY_TIMEOUT_SECS", "30"),
        ]));
        assert_eq!(s.output_path, "out.csv");
        assert_eq!(s.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn malformed_override_falls_back_to_defaults() {
        let s = Settings::from_env(env_from(&[
            ("FACULTY_OUTPUT_PATH", "out.csv"),
            ("FACULTY_TIMEOUT_SECS", "abc"),
        ]));
        assert_eq!(s.output_path, DEFAULT_OUTPUT_PATH);
        assert_eq!(s.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
