// src/error.rs
//! Failure taxonomy for the gateway and decoder. Every variant carries a short
//! human-readable message and nothing else: no credential, no full payload.

use thiserror::Error;

/// Failures of the single outbound chat-completion call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The API key is missing, empty, or still the placeholder value.
    /// Detected before any network activity.
    #[error("API key not configured. Set OPENROUTER_API_KEY to a valid OpenRouter API key.")]
    NotConfigured,

    /// No response within the configured budget. The call is not retried.
    #[error("Request timed out. The AI service took too long to respond.")]
    Timeout,

    /// Network or HTTP-level failure, including non-2xx status codes.
    #[error("API request failed: {message}")]
    Transport { message: String },

    /// HTTP 200 but the response body does not carry the expected
    /// `choices[0].message.content` field.
    #[error("Unexpected API response format: {message}")]
    UnexpectedShape { message: String },

    /// Anything that does not fit the variants above.
    #[error("An error occurred: {message}")]
    Unknown { message: String },
}

/// The model reply was not a single valid JSON value.
///
/// Carries at most [`PREVIEW_LIMIT`](crate::decoder::PREVIEW_LIMIT) characters
/// of the raw text so diagnostics stay bounded.
#[derive(Debug, Error)]
#[error("AI response was not valid JSON. Response preview: {preview}...")]
pub struct DecodeError {
    pub preview: String,
}

/// Union of everything an orchestration entry point can fail with.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ServiceError {
    /// Stable machine-readable tag for each failure kind, used by the
    /// [`ErrorInfo`](crate::types::envelope::ErrorInfo) envelope payload.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Gateway(GatewayError::NotConfigured) => "not_configured",
            ServiceError::Gateway(GatewayError::Timeout) => "timeout",
            ServiceError::Gateway(GatewayError::Transport { .. }) => "transport",
            ServiceError::Gateway(GatewayError::UnexpectedShape { .. }) => "unexpected_shape",
            ServiceError::Gateway(GatewayError::Unknown { .. }) => "unknown",
            ServiceError::Decode(_) => "decode",
        }
    }
}
