//! Axum route handlers for rendering stored résumés.

use axum::{
    extract::{Path, State},
    response::{Html, Response},
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::render::handlers::{pdf_response, run_blocking};
use crate::render::{export_pdf, preview_job, RenderJob};
use crate::state::AppState;

/// Loads a record, refusing unknown and expired ids.
async fn load_record(state: &AppState, id: Uuid) -> Result<ResumeRecord, AppError> {
    let record = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    if record.is_expired(Utc::now()) {
        return Err(AppError::Expired(format!("Resume {id} has expired")));
    }
    Ok(record)
}

/// GET /api/v1/resumes/:id/pdf
pub async fn handle_resume_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let record = load_record(&state, id).await?;
    let job = RenderJob::from_record(&record);
    let file_name = job.file_name();
    let geometry = state.geometry.clone();

    let bytes = run_blocking(move || export_pdf(&job, &geometry)).await??;

    info!("Rendered stored resume {id} ({} bytes)", bytes.len());
    Ok(pdf_response(bytes, &file_name))
}

/// GET /api/v1/resumes/:id/preview
pub async fn handle_resume_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let record = load_record(&state, id).await?;
    let job = RenderJob::from_record(&record);
    let html = run_blocking(move || preview_job(&job)).await?;
    Ok(Html(html))
}
