// src/types/mod.rs
pub mod envelope;
pub mod request;

pub use envelope::{ErrorInfo, ResultEnvelope};
pub use request::{
    CareerGoalInputs, JobDetails, OperationKind, OperationRequest, OptimizationInputs, UserInfo,
    RESUME_STYLES,
};
