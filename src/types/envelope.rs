// src/types/envelope.rs
//! Uniform success/error wrapper handed back by every orchestration entry
//! point. Callers never see a raw gateway or decoder fault.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Short, display-ready error payload. Never carries the credential, a stack
/// trace, or more than a bounded preview of model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: String,
    pub message: String,
}

impl From<&ServiceError> for ErrorInfo {
    fn from(err: &ServiceError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Exactly one variant is populated; `status` tags the wire form so UI-side
/// consumers can branch without probing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultEnvelope<T> {
    Success { data: T },
    Error { error: ErrorInfo },
}

impl<T> ResultEnvelope<T> {
    pub fn ok(data: T) -> Self {
        ResultEnvelope::Success { data }
    }

    pub fn err(error: ErrorInfo) -> Self {
        ResultEnvelope::Error { error }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ResultEnvelope::Success { .. })
    }

    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            ResultEnvelope::Success { data } => Ok(data),
            ResultEnvelope::Error { error } => Err(error),
        }
    }
}

impl<T> From<Result<T, ServiceError>> for ResultEnvelope<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(data) => ResultEnvelope::ok(data),
            Err(err) => ResultEnvelope::err(ErrorInfo::from(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;

    #[test]
    fn test_success_wire_shape() {
        let envelope = ResultEnvelope::ok(serde_json::json!({"ats_score": 85}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["ats_score"], 85);
    }

    #[test]
    fn test_error_wire_shape() {
        let err: ServiceError = GatewayError::Timeout.into();
        let envelope: ResultEnvelope<serde_json::Value> = Err(err).into();
        assert!(!envelope.is_ok());

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"]["kind"], "timeout");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("timed out"));
    }

    #[test]
    fn test_into_result_round_trip() {
        let envelope = ResultEnvelope::ok(42);
        assert_eq!(envelope.into_result().unwrap(), 42);

        let envelope: ResultEnvelope<i32> = ResultEnvelope::err(ErrorInfo {
            kind: "transport".to_string(),
            message: "API request failed: connection refused".to_string(),
        });
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.kind, "transport");
    }
}
