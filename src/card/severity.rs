//! Rule level → severity tier

use serde::Serialize;

use super::types::ContainerStyle;

/// Severity tier derived from the Wazuh rule level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Info = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Severity {
    /// Inclusive lower bounds, highest tier first
    pub fn from_level(rule_level: i64) -> Self {
        match rule_level {
            l if l >= 10 => Severity::High,
            l if l >= 7 => Severity::Medium,
            l if l >= 4 => Severity::Low,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Header container style (red, yellow, green, neutral)
    pub fn style(&self) -> ContainerStyle {
        match self {
            Severity::High => ContainerStyle::Attention,
            Severity::Medium => ContainerStyle::Warning,
            Severity::Low => ContainerStyle::Good,
            Severity::Info => ContainerStyle::Accent,
        }
    }
}
