// Résumé layout: plain-text structure inference and paginated placement.
// Pure and synchronous. Callers on the async side run it inside spawn_blocking.

pub mod classifier;
pub mod font_metrics;
pub mod geometry;
pub mod paginator;
pub mod strings;
pub mod template;
pub mod wrap;

// Re-export the public API consumed by the render module and handlers.
pub use classifier::{classify_document, ClassifiedDocument, ClassifiedLine};
pub use geometry::{default_geometry, PageGeometry, PageSize};
pub use paginator::{render, Page, Shape, TextRun};
pub use strings::{strings, Language};
pub use template::{template_style, TemplateId, TemplateStyle};
