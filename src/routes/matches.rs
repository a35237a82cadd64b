use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::MatchStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MatchStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/jobs/{job_id}/matches", web::get().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find ranked contractor matches for a job
///
/// GET /api/jobs/{jobId}/matches
///
/// Responds 200 with a JSON array of matches ordered by descending
/// matchScore, or 404 if the job does not exist. An empty array is a valid
/// response: it means no contractor reached the qualification threshold.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let job_id = path.into_inner();

    tracing::info!("Finding contractor matches for job {}", job_id);

    // Load the job snapshot
    let job = match state.store.get_job(job_id).await {
        Ok(Some(job)) => job,
        Ok(None) => {
            tracing::info!("Job {} not found", job_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Job not found".to_string(),
                message: format!("No job exists with id {}", job_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch job {}: {}", job_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch job".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    // Load the full contractor pool; the matcher scores everyone
    let contractors = match state.store.list_contractors().await {
        Ok(contractors) => contractors,
        Err(e) => {
            tracing::error!("Failed to list contractors for job {}: {}", job_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list contractors".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!(
        "Scoring {} contractors against job {} ({} in {})",
        contractors.len(),
        job_id,
        job.category,
        job.zip_code
    );

    let matches = state.matcher.find_matches(&job, contractors);

    tracing::info!("Returning {} matches for job {}", matches.len(), job_id);

    HttpResponse::Ok().json(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contractor, Job, JobStatus, Specialty};
    use crate::services::PostgresError;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    /// In-memory store standing in for PostgreSQL
    struct FixtureStore {
        jobs: Vec<Job>,
        contractors: Vec<Contractor>,
    }

    #[async_trait]
    impl MatchStore for FixtureStore {
        async fn get_job(&self, job_id: i64) -> Result<Option<Job>, PostgresError> {
            Ok(self.jobs.iter().find(|j| j.id == job_id).cloned())
        }

        async fn list_contractors(&self) -> Result<Vec<Contractor>, PostgresError> {
            Ok(self.contractors.clone())
        }

        async fn health_check(&self) -> Result<bool, PostgresError> {
            Ok(true)
        }
    }

    fn fixture_state(jobs: Vec<Job>, contractors: Vec<Contractor>) -> AppState {
        AppState {
            store: Arc::new(FixtureStore { jobs, contractors }),
            matcher: Matcher::with_default_weights(),
        }
    }

    fn fixture_job(id: i64) -> Job {
        Job {
            id,
            title: "Roof repair".to_string(),
            description: None,
            category: Specialty::Roofing,
            zip_code: "12345".to_string(),
            budget: 9_000.0,
            status: JobStatus::Open,
            created_at: None,
        }
    }

    fn fixture_contractor(id: i64, specialties: Vec<Specialty>, zip: &str, rating: Option<f64>) -> Contractor {
        Contractor {
            id,
            company_name: format!("Contractor {}", id),
            zip_code: zip.to_string(),
            rating,
            specialties,
        }
    }

    #[actix_web::test]
    async fn test_unknown_job_returns_404() {
        let state = fixture_state(vec![fixture_job(1)], vec![]);
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get().uri("/jobs/999/matches").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Job not found");
        assert_eq!(body.status_code, 404);
    }

    #[actix_web::test]
    async fn test_matches_endpoint_returns_ranked_array() {
        let state = fixture_state(
            vec![fixture_job(1)],
            vec![
                fixture_contractor(10, vec![Specialty::Roofing], "99999", None), // 50
                fixture_contractor(11, vec![Specialty::Roofing], "12345", Some(4.9)), // 100
                fixture_contractor(12, vec![Specialty::Painting], "99999", None), // 0, excluded
            ],
        );
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get().uri("/jobs/1/matches").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let matches = body.as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["contractorId"], 11);
        assert_eq!(matches[0]["matchScore"], 100);
        assert_eq!(matches[1]["contractorId"], 10);
        assert_eq!(matches[1]["matchScore"], 50);
    }

    #[actix_web::test]
    async fn test_empty_pool_returns_empty_array() {
        let state = fixture_state(vec![fixture_job(1)], vec![]);
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get().uri("/jobs/1/matches").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 0);
    }

    #[::std::prelude::v1::test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
