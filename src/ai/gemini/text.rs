use super::client::GeminiHttpClient;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::ai::TextGenerationService;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

pub struct GeminiTextClient {
    http: GeminiHttpClient,
}

impl GeminiTextClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(crate::models::DEFAULT_TEXT_TIMEOUT_SECS),
                "Text",
                client,
            ),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
    }
}

super::impl_with_gemini_base_url!(GeminiTextClient);

#[async_trait]
impl TextGenerationService for GeminiTextClient {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>> {
        let request = GenerateContentRequest::from_prompt(prompt);

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let text = Self::extract_text(&response);
        if text.is_none() {
            tracing::debug!(
                "Text model {} returned {} candidates without text",
                self.http.model(),
                response.candidates.len()
            );
        }
        Ok(text)
    }
}
