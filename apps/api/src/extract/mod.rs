//! Plain-text extraction from uploaded résumé files.
//!
//! The renderer only ever sees text, so every upload is reduced to a normalised
//! string here: UTF-8, `\n` line endings, no BOM, no trailing whitespace.

pub mod handlers;

use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("no text found in {0}")]
    Empty(String),

    #[error("I/O error during extraction: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Txt,
    Pdf,
    Docx,
}

impl SourceFormat {
    /// Detects the format from the file extension, falling back to the declared
    /// content type when the name has no recognised extension.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("txt") | Some("text") => return Some(SourceFormat::Txt),
            Some("pdf") => return Some(SourceFormat::Pdf),
            Some("docx") => return Some(SourceFormat::Docx),
            _ => {}
        }
        let mime = content_type?.split(';').next()?.trim().to_ascii_lowercase();
        match mime.as_str() {
            "text/plain" => Some(SourceFormat::Txt),
            "application/pdf" => Some(SourceFormat::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(SourceFormat::Docx)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub format: SourceFormat,
    pub text: String,
}

/// Extracts and normalises the text of one uploaded file. Blocking.
pub fn extract_text(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<ExtractedText, ExtractError> {
    let format = SourceFormat::detect(file_name, content_type)
        .ok_or_else(|| ExtractError::UnsupportedFormat(file_name.to_string()))?;

    let raw = match format {
        SourceFormat::Txt => String::from_utf8_lossy(bytes).into_owned(),
        SourceFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        SourceFormat::Docx => extract_docx(bytes)?,
    };

    let text = normalize_text(&raw);
    if text.trim().is_empty() {
        return Err(ExtractError::Empty(file_name.to_string()));
    }
    debug!(
        "Extracted {} chars from {file_name} ({format:?})",
        text.chars().count()
    );
    Ok(ExtractedText { format, text })
}

/// `docx-lite` reads from a path, so the upload is spooled to a temp file first.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut file = tempfile::Builder::new().suffix(".docx").tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    docx_lite::extract_text(file.path()).map_err(|e| ExtractError::Docx(e.to_string()))
}

/// Strips a leading BOM, unifies line endings, drops trailing whitespace and
/// control characters, and trims blank lines from both ends.
pub fn normalize_text(raw: &str) -> String {
    let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    let unified = raw.replace("\r\n", "\n").replace(['\r', '\u{0C}'], "\n");

    let lines: Vec<String> = unified
        .split('\n')
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() || *c == '\t')
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}
