//! Invocation arguments
//!
//! The Wazuh integrator runs `custom-*` scripts as
//! `<alert_file> <api_key> <hook_url> [options_file] [debug]`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "custom-teams", version, about = "Post a Wazuh alert to Microsoft Teams")]
pub struct Invocation {
    /// JSON alert written by the integrator
    pub alert_file: PathBuf,

    /// Reserved by the integrator calling convention (unused)
    #[arg(value_name = "API_KEY")]
    pub api_key: String,

    /// Teams / Power Automate webhook URL
    pub hook_url: String,

    /// Anything else the integrator passes is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrator_arguments() {
        let invocation = Invocation::try_parse_from([
            "custom-teams",
            "/tmp/custom-teams-1714644672-42.alert",
            "",
            "https://prod.logic.azure.com/workflows/1/invoke?a=1&amp;b=2",
            "/tmp/custom-teams-1714644672-42.options",
            "debug",
        ])
        .unwrap();

        assert_eq!(invocation.alert_file, PathBuf::from("/tmp/custom-teams-1714644672-42.alert"));
        assert_eq!(invocation.hook_url, "https://prod.logic.azure.com/workflows/1/invoke?a=1&amp;b=2");
        assert_eq!(invocation.extra, ["/tmp/custom-teams-1714644672-42.options", "debug"]);
    }

    #[test]
    fn test_exactly_three_arguments() {
        let invocation =
            Invocation::try_parse_from(["custom-teams", "alert.json", "key", "https://hook"]).unwrap();
        assert_eq!(invocation.api_key, "key");
        assert!(invocation.extra.is_empty());
    }

    #[test]
    fn test_missing_hook_url() {
        assert!(Invocation::try_parse_from(["custom-teams", "alert.json", "key"]).is_err());
    }
}
