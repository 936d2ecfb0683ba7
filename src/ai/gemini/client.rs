use crate::models::{normalize_model_id, DEFAULT_BASE_URL};
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Lightweight Gemini REST client shared by the text and image modules.
///
/// The API key travels as the `key` query parameter.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
    service: &'static str,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` may be given with or without a `models/` prefix. `service`
    /// names the endpoint in diagnostics (for example `Text` or `Image`).
    pub fn new(api_key: String, model: String, timeout: Duration, service: &'static str) -> Self {
        Self::new_with_client(api_key, model, timeout, service, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        timeout: Duration,
        service: &'static str,
        client: Client,
    ) -> Self {
        Self {
            client,
            api_key,
            model: normalize_model_id(&model),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
            service,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, self.model, method)
    }

    async fn post_to_url<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        url: String,
        request: &Req,
    ) -> Result<Resp> {
        tracing::debug!("Sending {} request to {}", self.service, url);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .query(&[("key", &self.api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("HTTP request to {} model failed: {}", self.service, e);
                e
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Reading {} response body failed: {}", self.service, e);
            e
        })?;

        if status != StatusCode::OK {
            tracing::error!("{} API error {}: {}", self.service, status.as_u16(), body);
            return Err(Error::Upstream {
                service: self.service,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {} response JSON: {}\nRaw: {}",
                self.service,
                e,
                body
            );
            Error::Decode(format!(
                "Failed to parse {} response JSON: {}",
                self.service, e
            ))
        })
    }

    /// Calls Gemini's `generateContent` endpoint.
    pub async fn generate_content<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        request: &Req,
    ) -> Result<Resp> {
        self.post_to_url(self.endpoint("generateContent"), request)
            .await
    }

    /// Calls the `predict` endpoint used by Imagen models.
    pub async fn predict<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        request: &Req,
    ) -> Result<Resp> {
        self.post_to_url(self.endpoint("predict"), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Echo {
        ok: bool,
    }

    fn make_client(server: &MockServer) -> GeminiHttpClient {
        GeminiHttpClient::new(
            "secret".to_string(),
            "models/gemini-pro".to_string(),
            Duration::from_secs(5),
            "Text",
        )
        .with_base_url(format!("{}/", server.uri()))
    }

    #[test]
    fn test_model_prefix_is_stripped() {
        let client = GeminiHttpClient::new(
            "k".to_string(),
            "models/imagen-4.0-generate-preview-06-06".to_string(),
            Duration::from_secs(1),
            "Image",
        );
        assert_eq!(client.model(), "imagen-4.0-generate-preview-06-06");
    }

    #[tokio::test]
    async fn test_api_key_is_sent_as_query_parameter() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(query_param("key", "secret"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let echo: Echo = make_client(&server)
            .generate_content(&serde_json::json!({}))
            .await
            .unwrap();
        assert!(echo.ok);
    }

    #[tokio::test]
    async fn test_non_ok_status_carries_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:predict"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .predict::<_, Echo>(&serde_json::json!({}))
            .await
            .unwrap_err();

        match err {
            Error::Upstream {
                service,
                status,
                body,
            } => {
                assert_eq!(service, "Text");
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_still_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202).set_body_string("accepted"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .generate_content::<_, Echo>(&serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Upstream { status: 202, .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .generate_content::<_, Echo>(&serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = GeminiHttpClient::new(
            "k".to_string(),
            "gemini-pro".to_string(),
            Duration::from_secs(2),
            "Text",
        )
        .with_base_url(uri);

        let err = client
            .generate_content::<_, Echo>(&serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
