use super::client::GeminiHttpClient;
use super::types::{PredictInstance, PredictParameters, PredictRequest, PredictResponse};
use crate::ai::{mime, GeneratedImage, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use std::time::Duration;

pub const SAMPLE_COUNT: u32 = 1;
pub const SAMPLE_IMAGE_SIZE: &str = "1024x1024";

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(crate::models::DEFAULT_IMAGE_TIMEOUT_SECS),
                "Image",
                client,
            ),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }
}

super::impl_with_gemini_base_url!(GeminiImageClient);

#[async_trait]
impl ImageGenerationService for GeminiImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Option<GeneratedImage>> {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: SAMPLE_COUNT,
                sample_image_size: SAMPLE_IMAGE_SIZE.to_string(),
            },
        };

        let response: PredictResponse = self.http.predict(&request).await?;

        let Some(prediction) = response.predictions.into_iter().next() else {
            tracing::debug!("Image model {} returned no predictions", self.http.model());
            return Ok(None);
        };

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(prediction.bytes_base64_encoded.trim())
            .map_err(|e| {
                tracing::error!("Failed to decode base64 image: {}", e);
                Error::Decode(format!("Failed to decode base64 image: {}", e))
            })?;

        let mime_type = mime::resolve_mime(&prediction.mime_type, &bytes);
        tracing::debug!(
            "Imagen returned {} bytes with mime_type: {}",
            bytes.len(),
            mime_type
        );

        Ok(Some(GeneratedImage { bytes, mime_type }))
    }
}
