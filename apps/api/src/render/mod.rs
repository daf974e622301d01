//! Render pipeline glue: one `RenderJob` in, pages / PDF bytes / HTML preview out.
//!
//! Everything here is synchronous and CPU-bound. Handlers call it through
//! `tokio::task::spawn_blocking`.

pub mod handlers;
pub mod pdf;
pub mod preview;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{
    classify_document, render, strings, template_style, ClassifiedDocument, Language, Page,
    PageGeometry, TemplateId, TemplateStyle,
};
use crate::models::resume::ResumeRecord;

/// Largest résumé body accepted for rendering, in bytes.
pub const MAX_CONTENT_BYTES: usize = 200_000;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Body of the `/api/v1/render/*` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub content: String,
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A résumé ready to lay out. Built fresh for every render.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub content: String,
    pub target_role: Option<String>,
    pub template: TemplateId,
    pub language: Language,
    pub title: String,
}

impl RenderJob {
    pub fn from_request(request: RenderRequest, default_language: Language) -> Self {
        let language = match request.language.as_deref() {
            Some(tag) => Language::resolve(Some(tag)),
            None => default_language,
        };
        RenderJob {
            content: request.content,
            target_role: request.target_role,
            template: TemplateId::resolve(request.template_id.as_deref()),
            language,
            title: request.title.unwrap_or_default(),
        }
    }

    /// Stored records carry no target role; the job description lives with the rewrite flow.
    pub fn from_record(record: &ResumeRecord) -> Self {
        RenderJob {
            content: record.content.clone(),
            target_role: None,
            template: TemplateId::resolve(record.template_id.as_deref()),
            language: Language::resolve(record.language.as_deref()),
            title: record.title.clone(),
        }
    }

    pub fn style(&self) -> TemplateStyle {
        template_style(self.template)
    }

    pub fn classify(&self, style: &TemplateStyle) -> ClassifiedDocument {
        classify_document(&self.content, style.header_lookahead)
    }

    /// File name for the PDF download: the title reduced to safe characters.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        if stem.is_empty() {
            "resume.pdf".to_string()
        } else {
            format!("{}.pdf", stem.to_ascii_lowercase())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

/// JSON form of a render, for clients that draw pages themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedResume {
    pub template_id: TemplateId,
    pub language: Language,
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

/// Classifies and paginates a job.
pub fn layout_job(job: &RenderJob, geometry: &PageGeometry) -> RenderedResume {
    let style = job.style();
    let doc = job.classify(&style);
    let pages = render(
        &doc.header,
        &doc.lines,
        job.target_role.as_deref(),
        geometry,
        &style,
        strings(job.language),
    );
    RenderedResume {
        template_id: job.template,
        language: job.language,
        page_width: geometry.page_width,
        page_height: geometry.page_height,
        pages,
    }
}

/// Lays out a job and encodes it as a PDF document.
pub fn export_pdf(job: &RenderJob, geometry: &PageGeometry) -> Result<Vec<u8>, RenderError> {
    let rendered = layout_job(job, geometry);
    pdf::encode_pdf(&rendered.pages, geometry, &job.style(), &job.title)
}

/// Builds the on-screen HTML preview for a job.
pub fn preview_job(job: &RenderJob) -> String {
    let style = job.style();
    let doc = job.classify(&style);
    preview::preview_html(
        &doc,
        job.target_role.as_deref(),
        &style,
        strings(job.language),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_geometry, PageSize};

    fn job(content: &str) -> RenderJob {
        RenderJob::from_request(
            RenderRequest {
                content: content.to_string(),
                target_role: None,
                template_id: Some("federal".to_string()),
                language: None,
                title: Some("Jane Doe — Résumé 2024".to_string()),
            },
            Language::Es,
        )
    }

    #[test]
    fn test_from_request_resolves_template_and_default_language() {
        let job = job("Jane");
        assert_eq!(job.template, TemplateId::Federal);
        assert_eq!(job.language, Language::Es);
    }

    #[test]
    fn test_unknown_template_falls_back_to_classic() {
        let mut request_job = job("Jane");
        request_job.template = TemplateId::resolve(Some("glossy"));
        assert_eq!(request_job.template, TemplateId::Classic);
    }

    #[test]
    fn test_file_name_is_sanitised() {
        assert_eq!(job("Jane").file_name(), "jane-doe-r-sum-2024.pdf");
        let mut untitled = job("Jane");
        untitled.title = "  ".to_string();
        assert_eq!(untitled.file_name(), "resume.pdf");
    }

    #[test]
    fn test_layout_job_is_idempotent() {
        let geometry = default_geometry(PageSize::Letter);
        let job = job("Jane Doe\nAustin, TX\n\nEXPERIENCE\n• Did a thing");
        assert_eq!(layout_job(&job, &geometry), layout_job(&job, &geometry));
    }

    #[test]
    fn test_export_pdf_produces_pdf_bytes() {
        let geometry = default_geometry(PageSize::A4);
        let bytes = export_pdf(&job("Jane Doe\n\nSKILLS\nExcel"), &geometry).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
