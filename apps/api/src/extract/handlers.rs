//! Axum route handler for file-to-text extraction.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, SourceFormat};
use crate::render::handlers::run_blocking;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub format: SourceFormat,
    pub text: String,
}

/// POST /api/v1/extract
///
/// Accepts a multipart upload with a single `file` field and returns its text,
/// ready to be sent back as `content` to the render endpoints.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        if bytes.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "{filename} is {} bytes; the limit is {}",
                bytes.len(),
                state.config.max_upload_bytes
            )));
        }

        let name = filename.clone();
        let extracted =
            run_blocking(move || extract_text(&name, content_type.as_deref(), &bytes)).await??;

        info!(
            "Extracted {} bytes of text from upload {filename}",
            extracted.text.len()
        );
        return Ok(Json(ExtractResponse {
            filename,
            format: extracted.format,
            text: extracted.text,
        }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
