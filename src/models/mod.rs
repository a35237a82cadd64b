// Model exports
pub mod domain;
pub mod responses;

pub use domain::{
    Contractor, ContractorMatch, Job, JobStatus, ScoringWeights, Specialty, MIN_MATCH_SCORE,
};
pub use responses::{ErrorResponse, HealthResponse};
