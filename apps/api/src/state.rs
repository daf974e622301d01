use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageGeometry;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only résumé lookup. Postgres in production, in-memory in tests.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
    /// Validated once at startup and shared by every render.
    pub geometry: PageGeometry,
}
