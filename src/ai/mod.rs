//! AI service integration for text and image generation
//!
//! Provides the service seams the prompt chain talks to, with Gemini-backed
//! implementations and in-memory mocks for tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{GeminiImageClient, GeminiTextClient};
pub use mock::{MockImageClient, MockTextClient};

use crate::Result;
use async_trait::async_trait;

/// Decoded image payload returned by an image generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Returns the first candidate's text, or `None` when the backend produced
    /// no candidates.
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Returns the first decoded image, or `None` when the backend produced
    /// no predictions.
    async fn generate_image(&self, prompt: &str) -> Result<Option<GeneratedImage>>;
}
