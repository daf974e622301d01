//! Text Structure Classifier: infers résumé structure from plain-text conventions.
//!
//! The rewrite service emits résumés as plain text: a name/contact block at the top,
//! ALL-CAPS section headings, `"• "` bullets and blank-line section separators. Nothing
//! here looks at neighbouring lines except the fixed header rule in `extract_header`.
//!
//! # Known heuristic limits
//! - A phone-number-only line below the header has no lowercase letters → `Heading`.
//! - An ALL-CAPS job title → `Heading`.
//! - Only `"• "` and `"- "` mark bullets; `"* "` stays a `Paragraph`.

use serde::{Deserialize, Serialize};

/// Lines scanned after the name line when looking for the blank line that closes the header.
pub const DEFAULT_HEADER_LOOKAHEAD: usize = 6;

const BULLET_MARKERS: [&str; 2] = ["• ", "- "];

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Structural role of one line below the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ClassifiedLine {
    /// Whitespace-only line. Contributes one body line of vertical space.
    Blank,
    /// Section title such as `EXPERIENCE`.
    Heading(String),
    /// Bullet body with the marker stripped.
    Bullet(String),
    /// Job titles, company lines, prose.
    Paragraph(String),
}

/// Name/subtitle/contact prefix of a résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    /// First non-empty line. `None` only when the document has no text at all.
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub contacts: Vec<String>,
    /// Number of input lines covered by the header, leading blank lines included.
    /// `lines[consumed..]` is the remainder.
    pub consumed: usize,
}

/// Header plus classified remainder, ready for layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDocument {
    pub header: HeaderBlock,
    pub lines: Vec<ClassifiedLine>,
}

// ────────────────────────────────────────────────────────────────────────────
// Header extraction
// ────────────────────────────────────────────────────────────────────────────

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits the header block off the top of `lines`.
///
/// The first non-empty line is the name. If a blank line follows within `lookahead`
/// lines, everything between is subtitle + contacts and the remainder starts at that
/// blank line. Otherwise only the next line is taken as the subtitle.
///
/// The returned remainder is always a suffix of `lines`.
pub fn extract_header<S: AsRef<str>>(lines: &[S], lookahead: usize) -> (HeaderBlock, &[S]) {
    let Some(name_idx) = lines.iter().position(|l| !is_blank(l.as_ref())) else {
        let header = HeaderBlock {
            consumed: lines.len(),
            ..HeaderBlock::default()
        };
        return (header, &lines[lines.len()..]);
    };

    let name = Some(lines[name_idx].as_ref().trim().to_string());
    let window_end = (name_idx + 1 + lookahead).min(lines.len());
    let closing_blank = (name_idx + 1..window_end).find(|&i| is_blank(lines[i].as_ref()));

    let header = match closing_blank {
        Some(blank_idx) => {
            let mut rest = lines[name_idx + 1..blank_idx]
                .iter()
                .map(|l| l.as_ref().trim().to_string());
            let subtitle = rest.next();
            HeaderBlock {
                name,
                subtitle,
                contacts: rest.collect(),
                consumed: blank_idx,
            }
        }
        None => {
            // An empty window (lookahead 0) can leave a blank line here; it stays in the remainder.
            let subtitle = lines
                .get(name_idx + 1)
                .filter(|l| !is_blank(l.as_ref()))
                .map(|l| l.as_ref().trim().to_string());
            let consumed = if subtitle.is_some() {
                name_idx + 2
            } else {
                name_idx + 1
            };
            HeaderBlock {
                name,
                subtitle,
                contacts: Vec::new(),
                consumed: consumed.min(lines.len()),
            }
        }
    };

    let remainder = &lines[header.consumed..];
    (header, remainder)
}

// ────────────────────────────────────────────────────────────────────────────
// Line classification
// ────────────────────────────────────────────────────────────────────────────

/// Classifies a single line. Total over all input; depends on nothing but `line`.
///
/// Priority: blank → bullet marker → no ASCII lowercase (heading) → paragraph.
pub fn classify_line(line: &str) -> ClassifiedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ClassifiedLine::Blank;
    }

    if let Some(body) = BULLET_MARKERS
        .iter()
        .find_map(|marker| trimmed.strip_prefix(marker))
    {
        return ClassifiedLine::Bullet(body.trim_start().to_string());
    }

    let has_lowercase = trimmed.bytes().any(|b| b.is_ascii_lowercase());
    if !has_lowercase && !is_marker_only(trimmed) {
        return ClassifiedLine::Heading(trimmed.to_string());
    }

    ClassifiedLine::Paragraph(trimmed.to_string())
}

/// True for separator lines made only of marker characters, such as `"---"` or `"•••"`.
fn is_marker_only(trimmed: &str) -> bool {
    trimmed.chars().all(|c| c == '•' || c == '-')
}

/// Runs header extraction and classifies the remainder.
pub fn classify_document(text: &str, lookahead: usize) -> ClassifiedDocument {
    let lines: Vec<&str> = text.lines().collect();
    let (header, remainder) = extract_header(&lines, lookahead);
    ClassifiedDocument {
        header,
        lines: remainder.iter().map(|l| classify_line(l)).collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
