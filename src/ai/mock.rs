use super::{GeneratedImage, ImageGenerationService, TextGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Tiny 1x1 PNG returned when no image response is configured.
const DEFAULT_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44,
    0x41, // IDAT chunk
    0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2, 0x25,
    0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn mock_upstream_error(service: &'static str, failure: &(u16, String)) -> Error {
    Error::Upstream {
        service,
        status: failure.0,
        body: failure.1.clone(),
    }
}

#[derive(Clone)]
pub struct MockTextClient {
    responses: Arc<Mutex<Vec<Option<String>>>>,
    failure: Arc<Mutex<Option<(u16, String)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_text_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(Some(response));
        self
    }

    /// Simulate a response with zero candidates.
    pub fn with_no_candidates(self) -> Self {
        self.responses.lock().unwrap().push(None);
        self
    }

    pub fn with_failure(self, status: u16, body: &str) -> Self {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockTextClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextClient {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>> {
        let count = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        if let Some(failure) = self.failure.lock().unwrap().as_ref() {
            return Err(mock_upstream_error("Text", failure));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Some(format!("An answer to: {}", prompt)))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<Option<GeneratedImage>>>>,
    failure: Arc<Mutex<Option<(u16, String)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_image_response(self, bytes: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push(Some(GeneratedImage {
            bytes,
            mime_type: "image/png".to_string(),
        }));
        self
    }

    /// Simulate a response with zero predictions.
    pub fn with_no_predictions(self) -> Self {
        self.responses.lock().unwrap().push(None);
        self
    }

    pub fn with_failure(self, status: u16, body: &str) -> Self {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Option<GeneratedImage>> {
        let count = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        if let Some(failure) = self.failure.lock().unwrap().as_ref() {
            return Err(mock_upstream_error("Image", failure));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Some(GeneratedImage {
                bytes: DEFAULT_PNG.to_vec(),
                mime_type: "image/png".to_string(),
            }))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_text_client_default_response() {
        let client = MockTextClient::new();

        let text = client.generate_text("apples").await.unwrap().unwrap();
        assert!(text.contains("apples"));
        assert_eq!(client.received_prompts(), vec!["apples".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_text_client_custom_responses_cycle() {
        let client = MockTextClient::new()
            .with_text_response("first".to_string())
            .with_no_candidates();

        assert_eq!(
            client.generate_text("q").await.unwrap().as_deref(),
            Some("first")
        );
        assert_eq!(client.generate_text("q").await.unwrap(), None);

        // Should cycle back
        assert_eq!(
            client.generate_text("q").await.unwrap().as_deref(),
            Some("first")
        );
        assert_eq!(client.get_call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_image_client_default_is_png() {
        let client = MockImageClient::new();

        let image = client.generate_image("test").await.unwrap().unwrap();
        assert_eq!(&image.bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(client.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_failures_are_upstream_errors() {
        let text = MockTextClient::new().with_failure(500, "boom");
        let err = text.generate_text("q").await.unwrap_err();
        assert!(matches!(err, Error::Upstream { status: 500, .. }));

        let image = MockImageClient::new().with_failure(503, "busy");
        let err = image.generate_image("q").await.unwrap_err();
        assert!(err.to_string().contains("busy"));
        assert_eq!(image.get_call_count(), 1);
    }
}
