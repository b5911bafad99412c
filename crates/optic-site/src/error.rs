//! Server start-up errors

use optic_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("Leptos configuration error: {0}")]
    Leptos(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
