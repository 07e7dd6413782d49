//! # Gemini Advice Provider
//!
//! `AdviceProvider` backed by the Google Generative Language
//! `generateContent` endpoint. One request per call, no retries.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::config::AdviceConfig;
use crate::backend::domain::{AdviceError, AdviceProvider, AdviceRequest};

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    api_key: Option<String>,
    model: String,
    api_base: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: &AdviceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model)
    }

    fn to_gemini_request(request: &AdviceRequest) -> GeminiRequest {
        GeminiRequest {
            contents: request
                .turns
                .iter()
                .map(|turn| GeminiContent {
                    role: Some(turn.role.as_str().to_string()),
                    parts: vec![GeminiPart {
                        text: Some(turn.text.clone()),
                    }],
                })
                .collect(),
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: Some(request.system_instruction.clone()),
                }],
            },
            generation_config: GeminiGenerationConfig {
                temperature: request.sampling.temperature,
                top_p: request.sampling.top_p,
                top_k: request.sampling.top_k,
            },
        }
    }
}

fn network_error(e: reqwest::Error) -> AdviceError {
    AdviceError::Network(e.to_string())
}

/// Concatenated text parts of the first candidate, None when there is no text
fn extract_text(response: GeminiResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content?
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl AdviceProvider for GeminiProvider {
    async fn generate(&self, request: &AdviceRequest) -> Result<Option<String>, AdviceError> {
        let api_key = self.api_key.as_deref().ok_or(AdviceError::MissingApiKey)?;
        let body = Self::to_gemini_request(request);

        info!("Sending advice request to Gemini (model: {})", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let text = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            return Err(AdviceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)?;
        let reply = extract_text(parsed);
        debug!(
            "Gemini replied with {} characters",
            reply.as_ref().map(|r| r.len()).unwrap_or(0)
        );
        Ok(reply)
    }
}

// Gemini API request/response types
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    system_instruction: GeminiContent,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use shared::ChatMessage;

    const PATH: &str = "/v1beta/models/gemini-test:generateContent";

    fn provider_for(server: &Server, api_key: Option<&str>) -> GeminiProvider {
        let config = AdviceConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-test".to_string(),
            api_base: server.url(),
            timeout_secs: Some(5),
        };
        GeminiProvider::new(&config).expect("client should build")
    }

    fn request() -> AdviceRequest {
        AdviceRequest::build(
            &[ChatMessage::model("Hi there!")],
            "Bird diet plan",
        )
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                "candidates": [{
                    "content": {
                        "parts": [{"text": "Seeds, "}, {"text": "pellets and greens."}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }]
            }"#,
            )
            .create_async()
            .await;

        let provider = provider_for(&server, Some("test-key"));
        let reply = provider.generate(&request()).await.unwrap();

        assert_eq!(reply.as_deref(), Some("Seeds, pellets and greens."));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_body_shape() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_body(Matcher::PartialJson(serde_json::json!({
                "contents": [
                    {"role": "model", "parts": [{"text": "Hi there!"}]},
                    {"role": "user", "parts": [{"text": "Bird diet plan"}]}
                ],
                "generationConfig": {"topK": 40}
            })))
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let provider = provider_for(&server, Some("test-key"));
        let reply = provider.generate(&request()).await.unwrap();

        assert_eq!(reply, None);
        mock.assert_async().await;
    }

    #[test]
    fn test_request_serialization() {
        let body = serde_json::to_value(GeminiProvider::to_gemini_request(&request())).unwrap();

        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("veterinarian"));
        assert!(body["systemInstruction"].get("role").is_none());
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        let top_p = body["generationConfig"]["topP"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        assert!((top_p - 0.8).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_candidate_without_text_is_none() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"candidates": [{"content": {"parts": [], "role": "model"}}]}"#)
            .create_async()
            .await;

        let provider = provider_for(&server, Some("test-key"));
        assert_eq!(provider.generate(&request()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(403)
            .with_body(r#"{"error": {"message": "API key not valid"}}"#)
            .create_async()
            .await;

        let provider = provider_for(&server, Some("bad-key"));
        match provider.generate(&request()).await {
            Err(AdviceError::Status { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let provider = provider_for(&server, Some("test-key"));
        assert!(matches!(
            provider.generate(&request()).await,
            Err(AdviceError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = AdviceConfig {
            api_key: Some("test-key".to_string()),
            model: "gemini-test".to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
            timeout_secs: Some(5),
        };
        let provider = GeminiProvider::new(&config).expect("client should build");

        assert!(matches!(
            provider.generate(&request()).await,
            Err(AdviceError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let provider = provider_for(&server, None);
        assert!(matches!(
            provider.generate(&request()).await,
            Err(AdviceError::MissingApiKey)
        ));
        mock.assert_async().await;
    }
}
