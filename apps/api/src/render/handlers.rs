//! Axum route handlers for rendering posted résumé text.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::render::{
    export_pdf, layout_job, preview_job, RenderJob, RenderRequest, RenderedResume,
    MAX_CONTENT_BYTES,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// Runs CPU-bound layout work off the async executor.
pub async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed: {e}")))
}

/// Wraps PDF bytes as an attachment download.
pub fn pdf_response(bytes: Vec<u8>, file_name: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

fn validate(request: &RenderRequest) -> Result<(), AppError> {
    let size = request.content.len() + request.target_role.as_deref().map_or(0, str::len);
    if size > MAX_CONTENT_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "content is {size} bytes; the limit is {MAX_CONTENT_BYTES}"
        )));
    }
    Ok(())
}

fn job_from(state: &AppState, request: RenderRequest) -> Result<RenderJob, AppError> {
    validate(&request)?;
    Ok(RenderJob::from_request(
        request,
        state.config.default_language,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/render/layout
///
/// Returns the positioned runs and shapes of every page.
pub async fn handle_render_layout(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderedResume>, AppError> {
    let job = job_from(&state, request)?;
    let geometry = state.geometry.clone();

    let rendered = run_blocking(move || layout_job(&job, &geometry)).await?;

    let content_runs = rendered
        .pages
        .iter()
        .flat_map(|page| &page.runs)
        .filter(|run| run.role.is_body_content())
        .count();
    debug!(
        "Laid out {} page(s), {content_runs} content runs, template {}",
        rendered.pages.len(),
        rendered.template_id.as_str()
    );
    Ok(Json(rendered))
}

/// POST /api/v1/render/pdf
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let job = job_from(&state, request)?;
    let file_name = job.file_name();
    let template = job.template;
    let geometry = state.geometry.clone();

    let bytes = run_blocking(move || export_pdf(&job, &geometry)).await??;

    info!(
        "Rendered PDF {file_name} with template {} ({} bytes)",
        template.as_str(),
        bytes.len()
    );
    Ok(pdf_response(bytes, &file_name))
}

/// POST /api/v1/render/preview
pub async fn handle_render_preview(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let job = job_from(&state, request)?;
    let html = run_blocking(move || preview_job(&job)).await?;
    Ok(Html(html))
}
