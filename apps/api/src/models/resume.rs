use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored résumé as read from the `resumes` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub title: String,
    pub language: Option<String>,
    pub content: String,
    pub template_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Records past this instant are no longer served.
    pub expires_at: Option<DateTime<Utc>>,
}

impl ResumeRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
