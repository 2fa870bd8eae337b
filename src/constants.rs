//! Central Configuration Constants
//!
//! Single source of truth for defaults and the fixed card literals.
//! To change what the integration sends, only edit this file.

use std::time::Duration;

/// Default log file, next to the other Wazuh integration logs
pub const DEFAULT_LOG_PATH: &str = "/var/ossec/logs/custom-teams.log";

/// Default tracing filter directive
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Webhook request timeout (fixed, not configurable)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Used when the rule carries no description
pub const FALLBACK_DESCRIPTION: &str = "Wazuh Alert";

/// Plain text shown by clients that cannot render cards
pub const CARD_FALLBACK_TEXT: &str = "Wazuh Alert";

// ============================================
// Adaptive Card envelope
// ============================================

pub const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const ADAPTIVE_CARD_TYPE: &str = "AdaptiveCard";
pub const ADAPTIVE_CARD_VERSION: &str = "1.3";

// ============================================
// Toggle wiring (element ids referenced by actions)
// ============================================

pub const SHOW_TOGGLE_ID: &str = "showToggle";
pub const HIDE_TOGGLE_ID: &str = "hideToggle";
pub const FULL_LOG_ID: &str = "fullLogBlock";

pub const SHOW_TOGGLE_TITLE: &str = "Show Full Log ▸";
pub const HIDE_TOGGLE_TITLE: &str = "Hide Full Log ▾";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
