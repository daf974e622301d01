//! Static font-metric tables for the four standard PDF faces used by the templates.
//!
//! Character widths are in em units (relative to font size), taken from the Adobe
//! core-14 AFM files and rounded to two decimals. The PDF writer references these faces
//! by name without embedding them, so measuring against the same tables keeps the
//! wrap decisions consistent with what a viewer draws.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font selection
// ────────────────────────────────────────────────────────────────────────────

/// Type family used by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Sans-serif (classic and modern-clean templates).
    Helvetica,
    /// Serif (federal template).
    Times,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Bold,
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    /// PostScript name written into the PDF font dictionary.
    pub base_font: &'static str,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
    /// Width of U+2022 BULLET, the glyph drawn in front of bullet items.
    pub bullet_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`, except the bullet glyph.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else if c == '•' {
                    self.bullet_width
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures the rendered width of a string in points at `size_pt`.
    pub fn measure_pt(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    base_font: "Helvetica",
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.28, 0.28, 0.36, 0.56, 0.56, 0.89, 0.67, 0.19, 0.33, 0.33, 0.39, 0.58, 0.28, 0.33, 0.28, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.58, 0.58, 0.58, 0.56, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.67, 0.72, 0.72, 0.67, 0.61, 0.78, 0.72, 0.28, 0.50, 0.67, 0.56, 0.83,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.78, 0.67, 0.78, 0.72, 0.67, 0.61, 0.72, 0.67, 0.94, 0.67, 0.67, 0.61,
        // [     \     ]     ^     _     `
        0.28, 0.28, 0.28, 0.47, 0.56, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.28, 0.56, 0.56, 0.22, 0.22, 0.50, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.50, 0.28, 0.56, 0.50, 0.72, 0.50, 0.50, 0.50,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.58,
    ],
    average_char_width: 0.56,
    space_width: 0.28,
    bullet_width: 0.35,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    base_font: "Helvetica-Bold",
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.28, 0.33, 0.47, 0.56, 0.56, 0.89, 0.72, 0.24, 0.33, 0.33, 0.39, 0.58, 0.28, 0.33, 0.28, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.33, 0.33, 0.58, 0.58, 0.58, 0.61, 0.98,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.72, 0.72, 0.72, 0.67, 0.61, 0.78, 0.72, 0.28, 0.56, 0.72, 0.61, 0.83,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.78, 0.67, 0.78, 0.72, 0.67, 0.61, 0.72, 0.67, 0.94, 0.67, 0.67, 0.61,
        // [     \     ]     ^     _     `
        0.33, 0.28, 0.33, 0.58, 0.56, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.61, 0.56, 0.61, 0.56, 0.33, 0.61, 0.61, 0.28, 0.28, 0.56, 0.28, 0.89,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.61, 0.61, 0.61, 0.61, 0.39, 0.56, 0.33, 0.61, 0.56, 0.78, 0.56, 0.56, 0.50,
        // {     |     }     ~
        0.39, 0.28, 0.39, 0.58,
    ],
    average_char_width: 0.58,
    space_width: 0.28,
    bullet_width: 0.35,
};

static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    base_font: "Times-Roman",
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.33, 0.41, 0.50, 0.50, 0.83, 0.78, 0.18, 0.33, 0.33, 0.50, 0.56, 0.25, 0.33, 0.25, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.56, 0.56, 0.56, 0.44, 0.92,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.67, 0.67, 0.72, 0.61, 0.56, 0.72, 0.72, 0.33, 0.39, 0.72, 0.61, 0.89,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.72, 0.56, 0.72, 0.67, 0.56, 0.61, 0.72, 0.72, 0.94, 0.72, 0.72, 0.61,
        // [     \     ]     ^     _     `
        0.33, 0.28, 0.33, 0.47, 0.50, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.44, 0.50, 0.44, 0.50, 0.44, 0.33, 0.50, 0.50, 0.28, 0.28, 0.50, 0.28, 0.78,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.50, 0.50, 0.50, 0.50, 0.33, 0.39, 0.28, 0.50, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.48, 0.20, 0.48, 0.54,
    ],
    average_char_width: 0.48,
    space_width: 0.25,
    bullet_width: 0.35,
};

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    base_font: "Times-Bold",
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.33, 0.56, 0.50, 0.50, 1.00, 0.83, 0.28, 0.33, 0.33, 0.50, 0.57, 0.25, 0.33, 0.25, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50,
        // :     ;     <     =     >     ?     @
        0.33, 0.33, 0.57, 0.57, 0.57, 0.50, 0.93,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.67, 0.72, 0.72, 0.67, 0.61, 0.78, 0.78, 0.39, 0.50, 0.78, 0.67, 0.94,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.78, 0.61, 0.78, 0.72, 0.56, 0.67, 0.72, 0.72, 1.00, 0.72, 0.72, 0.67,
        // [     \     ]     ^     _     `
        0.33, 0.28, 0.33, 0.58, 0.50, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.50, 0.56, 0.44, 0.56, 0.44, 0.33, 0.50, 0.56, 0.28, 0.33, 0.56, 0.28, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.50, 0.56, 0.56, 0.44, 0.39, 0.33, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.39, 0.22, 0.39, 0.52,
    ],
    average_char_width: 0.50,
    space_width: 0.25,
    bullet_width: 0.35,
};

/// Returns the static metric table for a family/weight pair.
pub fn get_metrics(family: FontFamily, weight: FontWeight) -> &'static FontMetricTable {
    match (family, weight) {
        (FontFamily::Helvetica, FontWeight::Regular) => &HELVETICA_TABLE,
        (FontFamily::Helvetica, FontWeight::Bold) => &HELVETICA_BOLD_TABLE,
        (FontFamily::Times, FontWeight::Regular) => &TIMES_ROMAN_TABLE,
        (FontFamily::Times, FontWeight::Bold) => &TIMES_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn helvetica() -> &'static FontMetricTable {
        get_metrics(FontFamily::Helvetica, FontWeight::Regular)
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(helvetica().measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let width = helvetica().measure_str(" ");
        assert!(
            (width - 0.28).abs() < 1e-4,
            "space width should be 0.28, got {width}"
        );
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(0.72) + u(0.56) + s(0.50) + t(0.28) = 2.06
        let width = helvetica().measure_str("Rust");
        assert!(
            (width - 2.06).abs() < 1e-3,
            "Rust width should be ~2.06, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = helvetica();
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_bullet_glyph_has_own_width() {
        let metrics = helvetica();
        assert!((metrics.measure_str("•") - metrics.bullet_width).abs() < 1e-4);
    }

    #[test]
    fn test_measure_pt_scales_with_size() {
        let metrics = helvetica();
        let at_10 = metrics.measure_pt("Experience", 10.0);
        let at_20 = metrics.measure_pt("Experience", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_at_least_as_wide_as_regular() {
        let text = "Senior Software Engineer";
        for family in [FontFamily::Helvetica, FontFamily::Times] {
            let regular = get_metrics(family, FontWeight::Regular).measure_str(text);
            let bold = get_metrics(family, FontWeight::Bold).measure_str(text);
            assert!(bold >= regular, "{family:?}: bold {bold} < regular {regular}");
        }
    }

    #[test]
    fn test_times_narrower_than_helvetica() {
        let text = "Coordinated logistics for regional programs";
        let times = get_metrics(FontFamily::Times, FontWeight::Regular).measure_str(text);
        assert!(times < helvetica().measure_str(text));
    }

    #[test]
    fn test_base_font_names_are_standard_faces() {
        assert_eq!(helvetica().base_font, "Helvetica");
        assert_eq!(
            get_metrics(FontFamily::Times, FontWeight::Bold).base_font,
            "Times-Bold"
        );
    }
}
