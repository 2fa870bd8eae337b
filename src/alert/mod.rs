//! Alert Module
//!
//! Loads one Wazuh alert from disk and validates it into an immutable
//! [`Alert`].
//!
//! # Components
//! - `types.rs`: the validated `Alert` record
//! - `reader.rs`: file loading, raw shape, field coercion

mod reader;
mod types;

pub use reader::{read, from_value};
pub use types::Alert;
