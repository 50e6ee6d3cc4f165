// src/service.rs
//! Orchestration entry points: render prompt, call the gateway, decode the
//! reply, wrap as an envelope. Each operation is stateless and independently
//! invocable; nothing here persists or validates the parsed value.

use anyhow::Result;
use serde_json::Value;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::decoder;
use crate::error::ServiceError;
use crate::gateway::AiGateway;
use crate::prompts;
use crate::types::envelope::ResultEnvelope;
use crate::types::request::{
    CareerGoalInputs, JobDetails, OperationRequest, OptimizationInputs, UserInfo,
};

pub struct AnalysisService {
    gateway: AiGateway,
}

impl AnalysisService {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        Ok(Self {
            gateway: AiGateway::new(config)?,
        })
    }

    /// Resume critique and ATS scoring for a stored resume document.
    pub async fn analyze_resume(&self, resume_url: &str) -> ResultEnvelope<Value> {
        self.run(OperationRequest::Analyze {
            resume_url: resume_url.to_string(),
        })
        .await
    }

    /// Score a stored resume against a posted job description.
    pub async fn match_job(&self, resume_url: &str, job: &JobDetails) -> ResultEnvelope<Value> {
        self.run(OperationRequest::Match {
            resume_url: resume_url.to_string(),
            job: job.clone(),
        })
        .await
    }

    /// Generate a resume from scratch from contact details and a target role.
    pub async fn generate_resume(
        &self,
        user: &UserInfo,
        target_job: &str,
        industry: &str,
        experience_level: &str,
    ) -> ResultEnvelope<Value> {
        self.run(OperationRequest::Generate {
            user: user.clone(),
            target_job: target_job.to_string(),
            industry: industry.to_string(),
            experience_level: experience_level.to_string(),
        })
        .await
    }

    /// Skill-development plan based on the resume and the user's goals.
    pub async fn plan_career(
        &self,
        resume_url: &str,
        goals: &CareerGoalInputs,
    ) -> ResultEnvelope<Value> {
        self.run(OperationRequest::Plan {
            resume_url: resume_url.to_string(),
            goals: goals.clone(),
        })
        .await
    }

    /// Tailored, template-styled rewrite of an existing resume, shaped for a
    /// downstream PDF renderer.
    pub async fn optimize_resume(
        &self,
        resume_url: &str,
        inputs: &OptimizationInputs,
    ) -> ResultEnvelope<Value> {
        self.run(OperationRequest::Optimize {
            resume_url: resume_url.to_string(),
            inputs: inputs.clone(),
        })
        .await
    }

    /// Run any operation request. The envelope is the only thing that leaves
    /// this layer; gateway and decoder faults never propagate as panics or
    /// raw errors.
    pub async fn run(&self, request: OperationRequest) -> ResultEnvelope<Value> {
        let kind = request.kind();
        info!(operation = kind.as_str(), "Running AI operation");

        let result = self.execute(&request).await;
        if let Err(ref err) = result {
            error!(operation = kind.as_str(), "AI operation failed: {}", err);
        }

        result.into()
    }

    async fn execute(&self, request: &OperationRequest) -> std::result::Result<Value, ServiceError> {
        let prompt = prompts::build_prompt(request);
        let raw_reply = self.gateway.send(&prompt).await?;
        let value = decoder::decode(&raw_reply)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{chat_completion_body, http_response, spawn_one_shot};

    fn service_for(base_url: String) -> AnalysisService {
        let config = GatewayConfig::default()
            .with_api_key(Some("sk-or-test".to_string()))
            .with_base_url(base_url)
            .with_timeout_secs(2);
        AnalysisService::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_returns_parsed_value_unchanged() {
        let content = r#"{"ats_score":85,"summary":"solid","strengths":["impact bullets"]}"#;
        let base_url =
            spawn_one_shot(http_response("200 OK", &chat_completion_body(content))).await;
        let service = service_for(base_url);

        let envelope = service
            .analyze_resume("https://cdn.example.com/r.pdf")
            .await;
        let value = envelope.into_result().unwrap();
        assert_eq!(value["ats_score"], 85);
        assert_eq!(value["strengths"][0], "impact bullets");
    }

    #[tokio::test]
    async fn test_unconfigured_service_yields_error_envelope() {
        let config = GatewayConfig::default();
        let service = AnalysisService::new(config).unwrap();

        let envelope = service
            .plan_career("https://cdn.example.com/r.pdf", &CareerGoalInputs::default())
            .await;
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.kind, "not_configured");
        assert!(err.message.contains("API key not configured"));
    }

    #[tokio::test]
    async fn test_non_json_reply_yields_decode_error_envelope() {
        let content = "I'd be happy to help! Here is my analysis in plain text.";
        let base_url =
            spawn_one_shot(http_response("200 OK", &chat_completion_body(content))).await;
        let service = service_for(base_url);

        let envelope = service
            .match_job("https://cdn.example.com/r.pdf", &JobDetails::default())
            .await;
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.kind, "decode");
        assert!(err.message.contains("Response preview"));
    }

    #[tokio::test]
    async fn test_http_error_yields_transport_envelope() {
        let base_url =
            spawn_one_shot(http_response("500 Internal Server Error", "upstream down")).await;
        let service = service_for(base_url);

        let envelope = service
            .generate_resume(&UserInfo::default(), "Engineer", "Tech", "Junior")
            .await;
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.kind, "transport");
        assert!(err.message.contains("500"));
    }

    #[tokio::test]
    async fn test_optimize_success_passes_pdf_resume_through() {
        let content = r#"{"pdf_resume":{"template_used":"Lunar","header":{"name":"Jane"}}}"#;
        let base_url =
            spawn_one_shot(http_response("200 OK", &chat_completion_body(content))).await;
        let service = service_for(base_url);

        let inputs = OptimizationInputs {
            template_type: Some("Lunar".to_string()),
            target_job_role: Some("Platform Engineer".to_string()),
            ..Default::default()
        };
        let envelope = service
            .optimize_resume("https://cdn.example.com/r.pdf", &inputs)
            .await;
        let value = envelope.into_result().unwrap();
        assert_eq!(value["pdf_resume"]["template_used"], "Lunar");
    }
}
