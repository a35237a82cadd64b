//! Remodel Match - Contractor matching service for the iRemodel marketplace
//!
//! This library provides the contractor-matching core used by the iRemodel
//! backend: a weighted scoring engine (specialty, proximity, rating) and a
//! match orchestrator that filters and ranks the contractor pool per job.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{calculate_match_score, Matcher};
pub use self::models::{
    Contractor, ContractorMatch, Job, JobStatus, ScoringWeights, Specialty, MIN_MATCH_SCORE,
};
