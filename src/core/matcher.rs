use crate::core::scoring::calculate_match_score;
use crate::models::{Contractor, ContractorMatch, Job, ScoringWeights, MIN_MATCH_SCORE};

/// Ranks the contractor pool for a job
///
/// Every contractor in the pool is scored against the job; those at or above
/// the qualification threshold are kept and returned in descending score
/// order. The computation is pure and request-scoped: it reads only the job
/// and contractor snapshots it is handed and holds no state between calls.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: i32,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, min_score: i32) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), MIN_MATCH_SCORE)
    }

    /// Score, filter, and rank the full contractor pool for one job
    ///
    /// Contractors below the threshold are silently excluded. An empty
    /// result is valid. Ties keep pool order; the sort is stable and no
    /// secondary key is defined.
    pub fn find_matches(&self, job: &Job, contractors: Vec<Contractor>) -> Vec<ContractorMatch> {
        let mut matches: Vec<ContractorMatch> = contractors
            .into_iter()
            .filter_map(|contractor| {
                let (score, reasons) = calculate_match_score(job, &contractor, &self.weights);

                if score >= self.min_score {
                    Some(ContractorMatch {
                        contractor_id: contractor.id,
                        specialty: contractor.primary_specialty(),
                        contractor_name: contractor.company_name,
                        zip_code: contractor.zip_code,
                        rating: contractor.rating.unwrap_or(0.0),
                        match_score: score,
                        match_reasons: reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
