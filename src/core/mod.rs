// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::Matcher;
pub use scoring::{
    calculate_match_score, calculate_proximity_score, calculate_rating_score,
    calculate_specialty_score, generate_match_reasons,
};
