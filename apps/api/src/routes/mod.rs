pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extract::handlers as extract;
use crate::render::handlers as render;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

/// Headroom over the upload limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Render posted text
        .route("/api/v1/render/layout", post(render::handle_render_layout))
        .route("/api/v1/render/pdf", post(render::handle_render_pdf))
        .route("/api/v1/render/preview", post(render::handle_render_preview))
        // Render stored résumés
        .route("/api/v1/resumes/:id/pdf", get(resumes::handle_resume_pdf))
        .route(
            "/api/v1/resumes/:id/preview",
            get(resumes::handle_resume_preview),
        )
        // Upload to text
        .route(
            "/api/v1/extract",
            post(extract::handle_extract).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
