//! Read-only résumé lookup.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`: Postgres in the service, an
//! in-memory map in tests.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Returns the record, or `None` if no row has this id. Expiry is the caller's check.
    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let record = sqlx::query_as::<_, ResumeRecord>(
            "SELECT id, title, language, content, template_id, created_at, expires_at \
             FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}

#[cfg(test)]
pub use memory::InMemoryResumeStore;
