use crate::models::{Contractor, Job, ScoringWeights, Specialty};

/// Calculate a match score (0-100) and the reasons behind it for one
/// job/contractor pair
///
/// Scoring formula:
/// score = (
///     specialty_score * 0.5 +      # Trade fit against the job category
///     proximity_score * 0.3 +      # Zip code similarity
///     rating_score * 0.2           # Review average tier
/// )
///
/// The weighted total is truncated to an integer, not rounded; historical
/// scores depend on the truncation.
pub fn calculate_match_score(
    job: &Job,
    contractor: &Contractor,
    weights: &ScoringWeights,
) -> (i32, Vec<String>) {
    let specialty_score = calculate_specialty_score(job.category, contractor.primary_specialty());
    let proximity_score = calculate_proximity_score(&job.zip_code, &contractor.zip_code);
    let rating_score = calculate_rating_score(contractor.rating);

    let total = specialty_score * weights.specialty
        + proximity_score * weights.proximity
        + rating_score * weights.rating;

    let reasons = generate_match_reasons(job, contractor);

    (total as i32, reasons)
}

/// Calculate specialty score (0-100)
///
/// Exact category match scores 100. The partial-credit branch checks only
/// whether the category name contains the specialty name, not the reverse;
/// the rule is one-directional and kept as-is for score compatibility.
/// A contractor with no declared specialties scores 0 on this axis.
#[inline]
pub fn calculate_specialty_score(category: Specialty, specialty: Option<Specialty>) -> f64 {
    match specialty {
        None => 0.0,
        Some(s) if s == category => 100.0,
        Some(s) if category.as_str().contains(s.as_str()) => 75.0,
        Some(_) => 0.0,
    }
}

/// Calculate proximity score (0-100)
///
/// Exact zip match scores 100; a shared 3-character prefix scores 75.
#[inline]
pub fn calculate_proximity_score(job_zip: &str, contractor_zip: &str) -> f64 {
    if job_zip == contractor_zip {
        100.0
    } else if same_area(job_zip, contractor_zip) {
        75.0
    } else {
        0.0
    }
}

/// Calculate rating score (0-100) from the review average tier
///
/// Unrated contractors score 0, below the lowest rated tier.
#[inline]
pub fn calculate_rating_score(rating: Option<f64>) -> f64 {
    match rating {
        None => 0.0,
        Some(r) if r >= 4.5 => 100.0,
        Some(r) if r >= 3.5 => 75.0,
        Some(r) if r >= 2.5 => 50.0,
        Some(_) => 25.0,
    }
}

/// Both zips are at least 3 characters long and share their first 3
///
/// Compared per character, not per byte, so multi-byte location codes
/// follow the same prefix rule as ASCII ones.
#[inline]
fn same_area(a: &str, b: &str) -> bool {
    a.chars().nth(2).is_some()
        && b.chars().nth(2).is_some()
        && a.chars().take(3).eq(b.chars().take(3))
}

/// Build the human-readable explanations shown alongside a match
///
/// Runs independently of the score: a reason is emitted for an exact
/// specialty match, for an exact or same-area zip match, and always for
/// exactly one rating tier. Unrated contractors fall through to the lowest
/// rating tier with a 0.0 sentinel, matching the historical output.
pub fn generate_match_reasons(job: &Job, contractor: &Contractor) -> Vec<String> {
    let mut reasons = Vec::new();

    // Specialty match
    if contractor.primary_specialty() == Some(job.category) {
        reasons.push(format!("Specializes in {} projects", job.category.label()));
    }

    // Location proximity
    if job.zip_code == contractor.zip_code {
        reasons.push("Located in your area".to_string());
    } else if same_area(&job.zip_code, &contractor.zip_code) {
        reasons.push("Located nearby".to_string());
    }

    // Rating tier
    match contractor.rating {
        Some(r) if r >= 4.5 => reasons.push(format!("Highly rated with {:.1} stars", r)),
        Some(r) if r >= 3.5 => reasons.push(format!("Good rating with {:.1} stars", r)),
        Some(r) if r >= 2.5 => reasons.push(format!("Average rating with {:.1} stars", r)),
        other => reasons.push(format!(
            "Below average rating with {:.1} stars",
            other.unwrap_or(0.0)
        )),
    }

    reasons
}
