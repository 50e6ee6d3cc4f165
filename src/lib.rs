// src/lib.rs
//! AI-backed resume analysis client.
//!
//! Wraps a hosted chat-completion API behind five typed operations: resume
//! critique, job matching, resume generation, career planning, and tailored
//! resume optimization. Callers hand in a document locator (an opaque URL to
//! an already-uploaded resume) plus per-operation inputs and get back a
//! uniform [`ResultEnvelope`] carrying either the parsed JSON reply or a
//! short, display-ready error.

pub mod config;
pub mod decoder;
pub mod error;
pub mod gateway;
pub mod prompts;
pub mod service;
pub mod types;

pub use config::GatewayConfig;
pub use error::{DecodeError, GatewayError, ServiceError};
pub use gateway::AiGateway;
pub use service::AnalysisService;
pub use types::{
    CareerGoalInputs, ErrorInfo, JobDetails, OperationKind, OperationRequest, OptimizationInputs,
    ResultEnvelope, UserInfo,
};
