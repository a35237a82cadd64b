use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{Contractor, Job, Specialty};
use crate::services::store::MatchStore;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid row data: {0}")]
    InvalidData(String),
}

/// PostgreSQL client providing the read-only snapshots the matcher consumes
///
/// The matching core never writes; jobs and contractor profiles are owned by
/// the marketplace CRUD services. This client only reads them.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Fetch a job by id, or None if it does not exist
    pub async fn get_job(&self, job_id: i64) -> Result<Option<Job>, PostgresError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, category, zip_code, budget, status, created_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            let category: String = row.try_get("category")?;
            let status: String = row.try_get("status")?;

            Ok(Job {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                description: row.try_get("description")?,
                category: category
                    .parse()
                    .map_err(PostgresError::InvalidData)?,
                zip_code: row.try_get("zip_code")?,
                budget: row.try_get("budget")?,
                status: status.parse().map_err(PostgresError::InvalidData)?,
                created_at: row.try_get("created_at")?,
            })
        })
        .transpose()
    }

    /// Fetch the full contractor pool with specialties materialized
    ///
    /// No pre-filtering by location or specialty happens here; the matcher
    /// scores every contractor.
    pub async fn list_contractors(&self) -> Result<Vec<Contractor>, PostgresError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.company_name, c.zip_code, c.rating,
                   COALESCE(
                       array_agg(s.specialty ORDER BY s.specialty)
                           FILTER (WHERE s.specialty IS NOT NULL),
                       '{}'
                   ) AS specialties
            FROM contractors c
            LEFT JOIN contractor_specialties s ON s.contractor_id = c.id
            GROUP BY c.id, c.company_name, c.zip_code, c.rating
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let specialties: Vec<String> = row.try_get("specialties")?;
                let specialties = specialties
                    .iter()
                    .map(|s| s.parse::<Specialty>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(PostgresError::InvalidData)?;

                Ok(Contractor {
                    id: row.try_get("id")?,
                    company_name: row.try_get("company_name")?,
                    zip_code: row.try_get("zip_code")?,
                    rating: row.try_get("rating")?,
                    specialties,
                })
            })
            .collect()
    }

    /// Check database connectivity
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        let result = sqlx::query("SELECT 1 as health")
            .fetch_one(&self.pool)
            .await?;

        let health: i32 = result.try_get("health")?;
        Ok(health == 1)
    }
}

#[async_trait]
impl MatchStore for PostgresClient {
    async fn get_job(&self, job_id: i64) -> Result<Option<Job>, PostgresError> {
        PostgresClient::get_job(self, job_id).await
    }

    async fn list_contractors(&self) -> Result<Vec<Contractor>, PostgresError> {
        PostgresClient::list_contractors(self).await
    }

    async fn health_check(&self) -> Result<bool, PostgresError> {
        PostgresClient::health_check(self).await
    }
}
