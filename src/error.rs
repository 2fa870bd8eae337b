//! Error handling

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure that aborts the run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// The alert file could not be turned into an `Alert`
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read alert file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("alert file {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("alert document has an unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("alert is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("alert field `{field}` is not an integer: {value}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("alert field `{field}` is not a string")]
    NotAString { field: &'static str },
}

/// The card could not be handed to the webhook.
///
/// HTTP error statuses are not errors; see [`crate::webhook::Delivery`].
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to serialize card: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("webhook transport failure: {0}")]
    Transport(#[source] Box<ureq::Transport>),
}
