//! Card Module - Microsoft Teams Adaptive Card rendering
//!
//! # Components
//! - `severity.rs`: rule level → severity tier and header style
//! - `types.rs`: typed Adaptive Card document tree
//! - `renderer.rs`: `Alert` → `AdaptiveCard`

mod renderer;
mod severity;
pub mod types;

pub use renderer::render;
pub use severity::Severity;
pub use types::{AdaptiveCard, ContainerStyle, Element};
