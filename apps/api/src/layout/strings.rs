//! Two-language string table for text the renderer itself supplies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Accepts `en`, `es` and region-qualified tags such as `es-MX`. Anything else is English.
    pub fn resolve(value: Option<&str>) -> Self {
        let primary = value
            .unwrap_or_default()
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Language::Es,
            _ => Language::En,
        }
    }
}

pub struct Strings {
    /// Drawn in place of the name line when the résumé text is empty.
    pub placeholder_name: &'static str,
    /// Label above the target role block.
    pub target_role_label: &'static str,
}

static EN: Strings = Strings {
    placeholder_name: "Your Name",
    target_role_label: "TARGET POSITION",
};

static ES: Strings = Strings {
    placeholder_name: "Tu Nombre",
    target_role_label: "PUESTO OBJETIVO",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}
