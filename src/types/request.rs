// src/types/request.rs
//! Typed inputs for the five operations. All optional fields are plain
//! strings; how an absent field renders in the prompt is the prompt builder's
//! concern, not the caller's.

use serde::{Deserialize, Serialize};

/// The nine named visual styles a tailored resume can request. The list is
/// informative only: an unknown style name is passed through into the prompt
/// unchanged rather than rejected.
pub const RESUME_STYLES: [&str; 9] = [
    "Cosmic", "Nebula", "Lunar", "Eclipse", "Eon", "Orion", "Nova", "Stellar", "Quantum",
];

/// Job posting fields for the match operation. Everything is optional; the
/// prompt renders missing company/level/salary as "Not specified" and missing
/// title/description as empty text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDetails {
    pub title: Option<String>,
    pub company: Option<String>,
    pub level: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Contact block for resume generation from scratch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Goal inputs for the career skill-development plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerGoalInputs {
    pub career_goal: Option<String>,
    pub timeframe: Option<String>,
    pub preferred_industry: Option<String>,
    pub current_skill_level: Option<String>,
    pub learning_commitment: Option<String>,
    pub target_outcome: Option<String>,
}

/// Inputs for the tailored/optimized resume operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizationInputs {
    /// One of [`RESUME_STYLES`], but not validated: arbitrary names pass
    /// through into the prompt unchecked.
    pub template_type: Option<String>,
    pub target_company: Option<String>,
    pub target_job_role: Option<String>,
    pub job_description: Option<String>,
    pub skills_to_highlight: Option<String>,
    pub projects: Option<String>,
    pub achievements: Option<String>,
    pub experience_level: Option<String>,
    pub additional_notes: Option<String>,
}

/// Tagged union over the five operations; selects which prompt template and
/// expected response shape apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationRequest {
    Analyze {
        resume_url: String,
    },
    Match {
        resume_url: String,
        job: JobDetails,
    },
    Generate {
        user: UserInfo,
        target_job: String,
        industry: String,
        experience_level: String,
    },
    Plan {
        resume_url: String,
        goals: CareerGoalInputs,
    },
    Optimize {
        resume_url: String,
        inputs: OptimizationInputs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Analyze,
    Match,
    Generate,
    Plan,
    Optimize,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Analyze => "analyze",
            OperationKind::Match => "match",
            OperationKind::Generate => "generate",
            OperationKind::Plan => "plan",
            OperationKind::Optimize => "optimize",
        }
    }
}

impl OperationRequest {
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationRequest::Analyze { .. } => OperationKind::Analyze,
            OperationRequest::Match { .. } => OperationKind::Match,
            OperationRequest::Generate { .. } => OperationKind::Generate,
            OperationRequest::Plan { .. } => OperationKind::Plan,
            OperationRequest::Optimize { .. } => OperationKind::Optimize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_styles_are_the_nine_known_names() {
        assert_eq!(RESUME_STYLES.len(), 9);
        assert!(RESUME_STYLES.contains(&"Cosmic"));
        assert!(RESUME_STYLES.contains(&"Quantum"));
    }

    #[test]
    fn test_operation_kind_mapping() {
        let request = OperationRequest::Analyze {
            resume_url: "https://example.com/resume.pdf".to_string(),
        };
        assert_eq!(request.kind(), OperationKind::Analyze);
        assert_eq!(request.kind().as_str(), "analyze");

        let request = OperationRequest::Match {
            resume_url: "https://example.com/resume.pdf".to_string(),
            job: JobDetails::default(),
        };
        assert_eq!(request.kind(), OperationKind::Match);
    }

    #[test]
    fn test_request_serde_tag() {
        let request = OperationRequest::Plan {
            resume_url: "https://example.com/resume.pdf".to_string(),
            goals: CareerGoalInputs::default(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["operation"], "plan");
    }
}
