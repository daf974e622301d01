//! Visual templates. A template is a bundle of styling constants selected by id;
//! the classification and pagination rules are shared by all of them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::classifier::DEFAULT_HEADER_LOOKAHEAD;
use crate::layout::font_metrics::FontFamily;

/// Template identifier as stored on the résumé record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[default]
    Classic,
    Federal,
    /// Preview-oriented variant; shares the classic pagination.
    ModernClean,
}

impl TemplateId {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Federal => "federal",
            TemplateId::ModernClean => "modern-clean",
        }
    }

    /// Resolves a stored or requested id. Missing or unknown ids fall back to `Classic`.
    pub fn resolve(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return TemplateId::default();
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "classic" | "" => TemplateId::Classic,
            "federal" => TemplateId::Federal,
            "modern-clean" | "modern_clean" | "modern" => TemplateId::ModernClean,
            other => {
                warn!(template_id = other, "Unknown template id, using classic");
                TemplateId::Classic
            }
        }
    }
}

/// RGB colour, 0–255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Channel values scaled to 0.0–1.0 for PDF colour operators.
    pub fn unit(self) -> [f32; 3] {
        [
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        ]
    }

    /// `#rrggbb` for CSS.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Styling constants for one template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateStyle {
    pub id: TemplateId,
    pub font_family: FontFamily,
    pub name_size: f32,
    pub subtitle_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub name_color: Rgb,
    pub heading_color: Rgb,
    pub text_color: Rgb,
    /// Subtitle and contact lines.
    pub muted_color: Rgb,
    pub rule_color: Rgb,
    pub rule_thickness: f32,
    /// Centre the name/subtitle/contact lines instead of left-aligning them.
    pub center_header: bool,
    /// Draw the target role inside a bordered "target position" box.
    pub target_callout: bool,
    pub callout_fill: Rgb,
    /// Header lookahead passed to `extract_header`.
    pub header_lookahead: usize,
}

/// Returns the styling constants for a template.
pub fn template_style(id: TemplateId) -> TemplateStyle {
    match id {
        TemplateId::Classic => TemplateStyle {
            id,
            font_family: FontFamily::Helvetica,
            name_size: 22.0,
            subtitle_size: 11.0,
            heading_size: 12.0,
            body_size: 10.5,
            name_color: Rgb(17, 24, 39),
            heading_color: Rgb(30, 64, 175),
            text_color: Rgb(31, 41, 55),
            muted_color: Rgb(75, 85, 99),
            rule_color: Rgb(209, 213, 219),
            rule_thickness: 0.8,
            center_header: false,
            target_callout: false,
            callout_fill: Rgb(255, 255, 255),
            header_lookahead: DEFAULT_HEADER_LOOKAHEAD,
        },
        // Federal résumés carry longer contact blocks (citizenship, clearance, veteran
        // status) so the header window is wider.
        TemplateId::Federal => TemplateStyle {
            id,
            font_family: FontFamily::Times,
            name_size: 20.0,
            subtitle_size: 11.0,
            heading_size: 12.0,
            body_size: 11.0,
            name_color: Rgb::BLACK,
            heading_color: Rgb(12, 35, 64),
            text_color: Rgb::BLACK,
            muted_color: Rgb(55, 65, 81),
            rule_color: Rgb(12, 35, 64),
            rule_thickness: 1.2,
            center_header: true,
            target_callout: true,
            callout_fill: Rgb(239, 243, 248),
            header_lookahead: 8,
        },
        TemplateId::ModernClean => TemplateStyle {
            id,
            font_family: FontFamily::Helvetica,
            name_size: 24.0,
            subtitle_size: 11.0,
            heading_size: 11.5,
            body_size: 10.0,
            name_color: Rgb(15, 118, 110),
            heading_color: Rgb(15, 118, 110),
            text_color: Rgb(38, 38, 38),
            muted_color: Rgb(115, 115, 115),
            rule_color: Rgb(15, 118, 110),
            rule_thickness: 1.5,
            center_header: false,
            target_callout: false,
            callout_fill: Rgb(255, 255, 255),
            header_lookahead: DEFAULT_HEADER_LOOKAHEAD,
        },
    }
}
