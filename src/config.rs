//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_PATH};

/// Integration configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Append-only log file
    pub log_path: PathBuf,

    /// Tracing filter directive (e.g. `debug`, `custom_teams=info`)
    pub log_level: String,

    /// Log the full payload and webhook URL before sending
    pub log_payloads: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_path: lookup("TEAMS_LOG_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),

            log_level: lookup("TEAMS_LOG_LEVEL")
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),

            log_payloads: lookup("TEAMS_LOG_PAYLOADS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_payloads: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_path, PathBuf::from("/var/ossec/logs/custom-teams.log"));
        assert!(config.log_payloads);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TEAMS_LOG_FILE", "/tmp/teams.log"),
            ("TEAMS_LOG_LEVEL", "info"),
            ("TEAMS_LOG_PAYLOADS", "off"),
        ]));
        assert_eq!(config.log_path, PathBuf::from("/tmp/teams.log"));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_payloads);
    }

    #[test]
    fn test_unparseable_flag_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[("TEAMS_LOG_PAYLOADS", "maybe")]));
        assert!(config.log_payloads);
    }
}
