//! Error types for the pcv CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid point '{0}': expected 'x,y'")]
    InvalidPoint(String),

    #[error("Invalid control point file: {0}")]
    InvalidControlPoints(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
