//! Page geometry: fixed page size, margins, and per-line-kind line heights.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Physical paper size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Parses a config value. Anything unrecognised is `None` so the caller can decide.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "letter" | "us-letter" => Some(PageSize::Letter),
            "a4" => Some(PageSize::A4),
            _ => None,
        }
    }

    /// `(width, height)` in PDF points.
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
        }
    }
}

/// Layout parameters for every page of a render. All lengths are in PDF points,
/// measured from the top-left corner of the page.
///
/// Invariant: `name_line_height > heading_line_height > body_line_height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    /// Applied on both the left and right edge.
    pub margin_x: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub name_line_height: f32,
    pub heading_line_height: f32,
    pub body_line_height: f32,
    /// Extra space added above every section heading.
    pub heading_gap: f32,
    /// Space between the header divider rule and the first body line.
    pub divider_gap: f32,
    /// Bullet glyph x offset from the left margin.
    pub bullet_glyph_offset: f32,
    /// Bullet text x offset from the left margin; also narrows the wrap width.
    pub bullet_indent: f32,
}

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("content width must be positive, got {0}pt")]
    NonPositiveContentWidth(f32),

    #[error("vertical margins leave no room for a body line")]
    NoVerticalRoom,

    #[error("line heights must satisfy name > heading > body > 0")]
    LineHeightOrder,

    #[error("bullet indent {0}pt leaves no room for bullet text")]
    BulletIndentTooWide(f32),
}

/// Returns the default geometry for a paper size: 0.75" side margins, 14pt body leading.
pub fn default_geometry(size: PageSize) -> PageGeometry {
    let (page_width, page_height) = size.dimensions_pt();
    PageGeometry {
        page_width,
        page_height,
        margin_x: 54.0,
        margin_top: 60.0,
        margin_bottom: 54.0,
        name_line_height: 28.0,
        heading_line_height: 18.0,
        body_line_height: 14.0,
        heading_gap: 6.0,
        divider_gap: 16.0,
        bullet_glyph_offset: 4.0,
        bullet_indent: 14.0,
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin_x
    }

    /// Lowest baseline a line may occupy before a page break is forced.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin_bottom
    }

    /// Rejects geometries the renderer cannot lay out. Called once at startup.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let width = self.content_width();
        if width <= 0.0 {
            return Err(GeometryError::NonPositiveContentWidth(width));
        }
        if !(self.name_line_height > self.heading_line_height
            && self.heading_line_height > self.body_line_height
            && self.body_line_height > 0.0)
        {
            return Err(GeometryError::LineHeightOrder);
        }
        if self.margin_top + self.name_line_height > self.bottom_limit() {
            return Err(GeometryError::NoVerticalRoom);
        }
        if self.bullet_indent >= width {
            return Err(GeometryError::BulletIndentTooWide(self.bullet_indent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_valid_for_both_sizes() {
        for size in [PageSize::Letter, PageSize::A4] {
            assert_eq!(default_geometry(size).validate(), Ok(()));
        }
    }

    #[test]
    fn test_content_width_subtracts_both_margins() {
        let geometry = default_geometry(PageSize::Letter);
        assert!((geometry.content_width() - (612.0 - 108.0)).abs() < 1e-4);
    }

    #[test]
    fn test_validate_rejects_non_positive_content_width() {
        let mut geometry = default_geometry(PageSize::Letter);
        geometry.margin_x = 306.0;
        assert!(matches!(
            geometry.validate(),
            Err(GeometryError::NonPositiveContentWidth(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_line_heights() {
        let mut geometry = default_geometry(PageSize::Letter);
        geometry.heading_line_height = geometry.name_line_height + 1.0;
        assert_eq!(geometry.validate(), Err(GeometryError::LineHeightOrder));
    }

    #[test]
    fn test_page_size_parse() {
        assert_eq!(PageSize::parse("A4"), Some(PageSize::A4));
        assert_eq!(PageSize::parse(" letter "), Some(PageSize::Letter));
        assert_eq!(PageSize::parse("legal"), None);
    }
}
