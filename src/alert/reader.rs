//! Alert Reader
//!
//! The integrator hands us a JSON file per alert. Wazuh is loose about
//! types (`agent.id` is `"001"`, `rule.id` is `"5715"`), so numeric fields
//! are coerced the same way for strings and numbers. Everything except the
//! rule description must be present.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::types::Alert;
use crate::constants::FALLBACK_DESCRIPTION;
use crate::error::InputError;

// ============================================================================
// RAW SHAPE
// ============================================================================

// `null` deserializes to `None`, so null and absent fields are treated alike.
#[derive(Debug, Deserialize)]
struct RawAlert {
    rule: Option<RawRule>,
    agent: Option<RawAgent>,
    full_log: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRule {
    id: Option<Value>,
    level: Option<Value>,
    description: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAgent {
    id: Option<Value>,
    name: Option<Value>,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Load and validate the alert stored at `path`
pub fn read(path: impl AsRef<Path>) -> Result<Alert, InputError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("{}", value);

    from_value(value)
}

/// Validate an already parsed alert document
pub fn from_value(value: Value) -> Result<Alert, InputError> {
    let raw: RawAlert = serde_json::from_value(value).map_err(InputError::Shape)?;
    let rule = raw.rule.unwrap_or_default();
    let agent = raw.agent.unwrap_or_default();

    let rule_id = integer("rule.id", rule.id)?;
    let rule_level = integer("rule.level", rule.level)?;
    let rule_description = match rule.description {
        Some(v) => string("rule.description", Some(v))?,
        None => String::new(),
    };
    let agent_id = integer("agent.id", agent.id)?;
    let agent_name = string("agent.name", agent.name)?;
    let full_log = string("full_log", raw.full_log)?;

    Ok(Alert {
        rule_id,
        rule_level,
        rule_description: if rule_description.is_empty() {
            FALLBACK_DESCRIPTION.to_string()
        } else {
            rule_description
        },
        agent_id,
        agent_name,
        full_log,
    })
}

// ============================================================================
// COERCION
// ============================================================================

fn integer(field: &'static str, value: Option<Value>) -> Result<i64, InputError> {
    let value = value.ok_or(InputError::MissingField(field))?;

    let parsed = match &value {
        Value::Number(n) => n.as_i64().or_else(|| {
            // Floats truncate toward zero; out-of-range values are rejected
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };

    parsed.ok_or_else(|| InputError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

fn string(field: &'static str, value: Option<Value>) -> Result<String, InputError> {
    match value.ok_or(InputError::MissingField(field))? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(InputError::NotAString { field }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
