//! Error handling and custom error types
//!
//! Provides unified error handling across the prompt chain using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GEMINI_API_KEY not found in environment")]
    MissingApiKey,

    #[error("No prompt provided")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{service} API error (status {status}): {body}")]
    Upstream {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
