//! Runtime configuration
//!
//! Resolves the API key, model identifiers, endpoint and output path from the
//! environment (optionally seeded from a local `.env` file).

use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-pro";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-preview-06-06";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OUTPUT_IMAGE_FILE: &str = "generated_image.png";
pub const DEFAULT_TEXT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub base_url: String,
    pub output_path: PathBuf,
    pub text_timeout: Duration,
    pub image_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::warn!(
                "Could not load .env file ({}). Proceeding with system env vars.",
                e
            );
        }

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get("GEMINI_API_KEY").ok_or(Error::MissingApiKey)?;

        Ok(Self {
            api_key,
            text_model: normalize_model_id(
                &get("GEMINI_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            ),
            image_model: normalize_model_id(
                &get("GEMINI_IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            ),
            base_url: get("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            output_path: get("OUTPUT_IMAGE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_IMAGE_FILE)),
            text_timeout: parse_timeout(
                "TEXT_TIMEOUT_SECS",
                get("TEXT_TIMEOUT_SECS"),
                DEFAULT_TEXT_TIMEOUT_SECS,
            )?,
            image_timeout: parse_timeout(
                "IMAGE_TIMEOUT_SECS",
                get("IMAGE_TIMEOUT_SECS"),
                DEFAULT_IMAGE_TIMEOUT_SECS,
            )?,
        })
    }
}

/// Endpoint URLs are composed as `/models/{model}:...`, so a `models/` prefix
/// would otherwise be doubled.
pub fn normalize_model_id(model: &str) -> String {
    let model = model.trim();
    model.strip_prefix("models/").unwrap_or(model).to_string()
}

fn parse_timeout(key: &str, raw: Option<String>, default_secs: u64) -> Result<Duration> {
    let secs = match raw {
        None => default_secs,
        Some(value) => value.trim().parse::<u64>().map_err(|_| {
            Error::Config(format!(
                "{} must be a whole number of seconds, got '{}'",
                key, value
            ))
        })?,
    };

    if secs == 0 {
        return Err(Error::Config(format!("{} must be greater than zero", key)));
    }

    Ok(Duration::from_secs(secs))
}
