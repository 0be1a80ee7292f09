//! Vision API HTTP client.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::api::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentPart, ImageUrl,
};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::media::encode_image_as_data_url;

/// Prompt steering the model towards short, underscore-separated keywords.
const KEYWORD_PROMPT: &str = "You are a filename generator. Describe the image using only 6 \
     keywords maximum, separated by underscores. Focus on the main subject. Ignore background \
     and surface. Example: red_mug_steam_handle_ceramic";

/// Supplies a short textual description per image.
///
/// The rename pipeline only depends on this trait, so tests can run the
/// orchestration without a model server.
#[async_trait]
pub trait DescriptionProvider {
    /// Get a keyword description for the image at `path`.
    async fn describe(&self, path: &Path) -> Result<String>;
}

/// Client for an OpenAI-compatible vision API (e.g. LM Studio).
pub struct VisionApi {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout_seconds: u64,
}

impl VisionApi {
    /// Create a new API client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout_seconds: config.timeout_seconds,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, data_url: String) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_url },
                    },
                    ContentPart::Text {
                        text: KEYWORD_PROMPT.to_string(),
                    },
                ],
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl DescriptionProvider for VisionApi {
    async fn describe(&self, path: &Path) -> Result<String> {
        let data_url = encode_image_as_data_url(path)?;
        let request = self.build_request(data_url);
        let endpoint = self.endpoint();

        debug!(
            "Calling API for {} with temp={}, max_tokens={}",
            path.display(),
            self.temperature,
            self.max_tokens
        );

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::ApiTimeout(self.timeout_seconds)
                } else {
                    Error::Http(e)
                }
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::Api(format!(
                "Endpoint {} not found (404). Check the model server setup.",
                endpoint
            )));
        }

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "HTTP {} from {}",
                response.status(),
                endpoint
            )));
        }

        let body: ChatCompletionResponse = response.json().await?;

        let content = body
            .first_content()
            .ok_or_else(|| Error::Api("No content in model response".to_string()))?;

        debug!("Model response: {:.100}", content);

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let mut config = ApiConfig::default();
        config.base_url = "http://localhost:1234/v1/".to_string();
        let api = VisionApi::new(&config).unwrap();
        assert_eq!(api.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn test_request_carries_prompt_and_image() {
        let api = VisionApi::new(&ApiConfig::default()).unwrap();
        let request = api.build_request("data:image/jpeg;base64,AAAA".to_string());

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert!(matches!(
            request.messages[0].content[0],
            ContentPart::ImageUrl { .. }
        ));
        match &request.messages[0].content[1] {
            ContentPart::Text { text } => assert!(text.contains("6 keywords")),
            other => panic!("unexpected part: {:?}", other),
        }
    }
}
