//! custom-teams - Wazuh → Microsoft Teams integration
//!
//! # Architecture
//!
//! ```text
//! alert file ──► alert::read ──► card::render ──► webhook::Dispatcher::send ──► Teams
//!                 (Alert)        (AdaptiveCard)         (Delivery)
//! ```
//!
//! One alert per process. Nothing is retried or persisted.

pub mod alert;
pub mod card;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod webhook;


pub use alert::Alert;
pub use card::{AdaptiveCard, Severity};
pub use cli::Invocation;
pub use config::Config;
pub use error::{DispatchError, Error, InputError, Result};
pub use webhook::{Delivery, Dispatcher};

/// Read, render and deliver the alert named by the invocation.
///
/// A rejected delivery is still `Ok`; only input and transport failures
/// are errors.
pub fn handle_alert(invocation: &Invocation, dispatcher: &Dispatcher) -> Result<Delivery> {
    let alert = alert::read(&invocation.alert_file)?;
    let card = card::render(&alert);
    Ok(dispatcher.send(&card, &invocation.hook_url)?)
}
