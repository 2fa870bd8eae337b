//! Alert Types

use serde::Serialize;

/// One security event raised by the Wazuh manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub rule_id: i64,
    /// Severity score assigned by the rule (drives card styling)
    pub rule_level: i64,
    pub rule_description: String,
    pub agent_id: i64,
    pub agent_name: String,
    /// Original log line(s), possibly multi-line
    pub full_log: String,
}
