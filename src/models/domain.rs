use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum total score a contractor must reach to appear in match results
pub const MIN_MATCH_SCORE: i32 = 35;

/// Trade categories shared by job postings and contractor profiles
///
/// Stored as their SCREAMING_SNAKE_CASE names in the database and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    Plumbing,
    Electrical,
    Hvac,
    Roofing,
    Painting,
    Carpentry,
    Landscaping,
    Flooring,
    Remodeling,
    General,
    Masonry,
    Drywall,
    Tile,
    Cabinetry,
    Countertops,
    Decks,
    Windows,
    Doors,
    Siding,
    Concrete,
    Demolition,
    Insulation,
    Fencing,
    Basement,
    HomeAddition,
    Garage,
    Gutters,
    Solar,
}

impl Specialty {
    /// Canonical name, as stored in the `category`/`specialty` columns
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Plumbing => "PLUMBING",
            Specialty::Electrical => "ELECTRICAL",
            Specialty::Hvac => "HVAC",
            Specialty::Roofing => "ROOFING",
            Specialty::Painting => "PAINTING",
            Specialty::Carpentry => "CARPENTRY",
            Specialty::Landscaping => "LANDSCAPING",
            Specialty::Flooring => "FLOORING",
            Specialty::Remodeling => "REMODELING",
            Specialty::General => "GENERAL",
            Specialty::Masonry => "MASONRY",
            Specialty::Drywall => "DRYWALL",
            Specialty::Tile => "TILE",
            Specialty::Cabinetry => "CABINETRY",
            Specialty::Countertops => "COUNTERTOPS",
            Specialty::Decks => "DECKS",
            Specialty::Windows => "WINDOWS",
            Specialty::Doors => "DOORS",
            Specialty::Siding => "SIDING",
            Specialty::Concrete => "CONCRETE",
            Specialty::Demolition => "DEMOLITION",
            Specialty::Insulation => "INSULATION",
            Specialty::Fencing => "FENCING",
            Specialty::Basement => "BASEMENT",
            Specialty::HomeAddition => "HOME_ADDITION",
            Specialty::Garage => "GARAGE",
            Specialty::Gutters => "GUTTERS",
            Specialty::Solar => "SOLAR",
        }
    }

    /// Lowercased name used in human-readable match reasons
    pub fn label(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLUMBING" => Ok(Specialty::Plumbing),
            "ELECTRICAL" => Ok(Specialty::Electrical),
            "HVAC" => Ok(Specialty::Hvac),
            "ROOFING" => Ok(Specialty::Roofing),
            "PAINTING" => Ok(Specialty::Painting),
            "CARPENTRY" => Ok(Specialty::Carpentry),
            "LANDSCAPING" => Ok(Specialty::Landscaping),
            "FLOORING" => Ok(Specialty::Flooring),
            "REMODELING" => Ok(Specialty::Remodeling),
            "GENERAL" => Ok(Specialty::General),
            "MASONRY" => Ok(Specialty::Masonry),
            "DRYWALL" => Ok(Specialty::Drywall),
            "TILE" => Ok(Specialty::Tile),
            "CABINETRY" => Ok(Specialty::Cabinetry),
            "COUNTERTOPS" => Ok(Specialty::Countertops),
            "DECKS" => Ok(Specialty::Decks),
            "WINDOWS" => Ok(Specialty::Windows),
            "DOORS" => Ok(Specialty::Doors),
            "SIDING" => Ok(Specialty::Siding),
            "CONCRETE" => Ok(Specialty::Concrete),
            "DEMOLITION" => Ok(Specialty::Demolition),
            "INSULATION" => Ok(Specialty::Insulation),
            "FENCING" => Ok(Specialty::Fencing),
            "BASEMENT" => Ok(Specialty::Basement),
            "HOME_ADDITION" => Ok(Specialty::HomeAddition),
            "GARAGE" => Ok(Specialty::Garage),
            "GUTTERS" => Ok(Specialty::Gutters),
            "SOLAR" => Ok(Specialty::Solar),
            other => Err(format!("unknown specialty: {}", other)),
        }
    }
}

/// Job lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "OPEN",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(JobStatus::Open),
            "IN_PROGRESS" => Ok(JobStatus::InProgress),
            "COMPLETED" => Ok(JobStatus::Completed),
            "CANCELLED" => Ok(JobStatus::Cancelled),
            other => Err(format!("unknown job status: {}", other)),
        }
    }
}

/// Remodeling job posted by a homeowner (read-only snapshot for matching)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Specialty,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub budget: f64,
    pub status: JobStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Contractor profile (read-only snapshot for matching)
///
/// The specialty list arrives fully materialized; no lazy loading happens
/// inside the scoring path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contractor {
    pub id: i64,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

impl Contractor {
    /// The single specialty used for scoring: the first listed one, stable
    /// for the duration of a match computation. None when the contractor has
    /// not declared any specialties.
    pub fn primary_specialty(&self) -> Option<Specialty> {
        self.specialties.first().copied()
    }
}

/// Ranked match result, computed fresh per request and never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorMatch {
    #[serde(rename = "contractorId")]
    pub contractor_id: i64,
    #[serde(rename = "contractorName")]
    pub contractor_name: String,
    pub specialty: Option<Specialty>,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub rating: f64,
    #[serde(rename = "matchScore")]
    pub match_score: i32,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub specialty: f64,
    pub proximity: f64,
    pub rating: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            specialty: 0.5,
            proximity: 0.3,
            rating: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialty_round_trip() {
        for s in [Specialty::Plumbing, Specialty::HomeAddition, Specialty::Solar] {
            assert_eq!(s.as_str().parse::<Specialty>(), Ok(s));
        }
    }

    #[test]
    fn test_specialty_label_is_lowercased_name() {
        assert_eq!(Specialty::Roofing.label(), "roofing");
        assert_eq!(Specialty::HomeAddition.label(), "home_addition");
    }

    #[test]
    fn test_primary_specialty_is_first_listed() {
        let contractor = Contractor {
            id: 1,
            company_name: "Acme Remodeling".to_string(),
            zip_code: "12345".to_string(),
            rating: Some(4.0),
            specialties: vec![Specialty::Tile, Specialty::Flooring],
        };
        assert_eq!(contractor.primary_specialty(), Some(Specialty::Tile));

        let none = Contractor {
            specialties: vec![],
            ..contractor
        };
        assert_eq!(none.primary_specialty(), None);
    }
}
