// src/gateway.rs
//! Single-shot client for the hosted chat-completion API. One outbound POST
//! per invocation, bounded by the configured timeout, no retry: these are
//! user-interactive requests and retry policy belongs to the caller.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Fixed persona sent as the system message on every call. Pairs with the
/// JSON-only instructions embedded in each prompt template.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert career advisor and resume consultant. \
     Always respond with valid JSON only, no markdown, no explanations.";

// OpenRouter attribution headers; part of the provider's wire contract.
const REFERER_HEADER: &str = "http://localhost:8000";
const TITLE_HEADER: &str = "AI Resume Analyzer";

pub struct AiGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl AiGateway {
    /// Create a gateway with an explicit configuration. A missing credential
    /// is not an error here; it surfaces per-call as
    /// [`GatewayError::NotConfigured`].
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send one rendered prompt and return the assistant's raw text reply.
    ///
    /// Exactly one network call; the credential check short-circuits before
    /// any connection is opened so misconfiguration never burns the timeout
    /// budget.
    pub async fn send(&self, prompt: &str) -> std::result::Result<String, GatewayError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if self.config.has_credential() => key,
            _ => {
                info!("Skipping AI call: API key missing or placeholder");
                return Err(GatewayError::NotConfigured);
            }
        };

        let body = self.build_request_body(prompt);

        info!(model = %self.config.model, "Sending chat-completion request");

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", REFERER_HEADER)
            .header("X-Title", TITLE_HEADER)
            .json(&body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("AI API error {}: {}", status, error_text);
            return Err(GatewayError::Transport {
                message: format!("HTTP {}: {}", status, error_text),
            });
        }

        let response_text = response.text().await.map_err(|e| GatewayError::Unknown {
            message: format!("Failed to read response body: {}", e),
        })?;

        let content = Self::extract_content(&response_text)?;

        info!("Received chat-completion reply ({} bytes)", content.len());
        Ok(content)
    }

    /// Request envelope per the provider contract: model id, system persona,
    /// user prompt, sampling parameters, and a JSON response-format hint.
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "response_format": { "type": "json_object" }
        })
    }

    /// Pull `choices[0].message.content` out of a 200 response body. Any
    /// other shape is a provider contract violation.
    fn extract_content(response_text: &str) -> std::result::Result<String, GatewayError> {
        let parsed: ChatResponse =
            serde_json::from_str(response_text).map_err(|e| GatewayError::UnexpectedShape {
                message: format!("response body is not a chat completion: {}", e),
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::UnexpectedShape {
                message: "missing choices[0].message.content".to_string(),
            })
    }
}

fn classify_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport {
            message: err.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::config::PLACEHOLDER_API_KEY;

    fn test_config(base_url: String) -> GatewayConfig {
        GatewayConfig::default()
            .with_api_key(Some("sk-or-test".to_string()))
            .with_base_url(base_url)
            .with_timeout_secs(2)
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits_without_network() {
        // Unroutable base URL: a network attempt would fail loudly, a fast
        // NotConfigured proves no call was made.
        let config = GatewayConfig::default().with_base_url("http://127.0.0.1:1/chat".to_string());
        let gateway = AiGateway::new(config).unwrap();

        let err = gateway.send("prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured));
    }

    #[tokio::test]
    async fn test_placeholder_key_short_circuits() {
        let config = GatewayConfig::default()
            .with_api_key(Some(PLACEHOLDER_API_KEY.to_string()))
            .with_base_url("http://127.0.0.1:1/chat".to_string());
        let gateway = AiGateway::new(config).unwrap();

        let err = gateway.send("prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured));
    }

    #[test]
    fn test_request_body_shape() {
        let config = GatewayConfig::default().with_api_key(Some("sk-or-test".to_string()));
        let gateway = AiGateway::new(config).unwrap();

        let body = gateway.build_request_body("analyze this resume");
        assert_eq!(body["model"], "openai/gpt-3.5-turbo");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["max_tokens"], 2000);
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], SYSTEM_INSTRUCTION);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "analyze this resume");
    }

    #[test]
    fn test_extract_content_success() {
        let body = chat_completion_body("{\"ats_score\": 85}");
        let content = AiGateway::extract_content(&body).unwrap();
        assert_eq!(content, "{\"ats_score\": 85}");
    }

    #[test]
    fn test_extract_content_empty_choices() {
        let err = AiGateway::extract_content(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, GatewayError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_extract_content_non_json_body() {
        let err = AiGateway::extract_content("<html>gateway error</html>").unwrap_err();
        assert!(matches!(err, GatewayError::UnexpectedShape { .. }));
    }

    #[tokio::test]
    async fn test_http_error_maps_to_transport_without_credential() {
        let base_url =
            spawn_one_shot(http_response("401 Unauthorized", r#"{"error":"bad key"}"#)).await;
        let gateway = AiGateway::new(test_config(base_url)).unwrap();

        let err = gateway.send("prompt").await.unwrap_err();
        match err {
            GatewayError::Transport { message } => {
                assert!(message.contains("401"));
                assert!(!message.contains("sk-or-test"));
            }
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ok_status_with_empty_choices_is_unexpected_shape() {
        let base_url = spawn_one_shot(http_response("200 OK", r#"{"choices":[]}"#)).await;
        let gateway = AiGateway::new(test_config(base_url)).unwrap();

        let err = gateway.send("prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::UnexpectedShape { .. }));
    }

    #[tokio::test]
    async fn test_stalled_server_times_out() {
        let base_url = spawn_stalled().await;
        let config = test_config(base_url).with_timeout_secs(1);
        let gateway = AiGateway::new(config).unwrap();

        let err = gateway.send("prompt").await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
    }

    #[tokio::test]
    async fn test_successful_round_trip() {
        let body = chat_completion_body(r#"{"match_percentage": 72}"#);
        let base_url = spawn_one_shot(http_response("200 OK", &body)).await;
        let gateway = AiGateway::new(test_config(base_url)).unwrap();

        let content = gateway.send("prompt").await.unwrap();
        assert_eq!(content, r#"{"match_percentage": 72}"#);
    }
}
