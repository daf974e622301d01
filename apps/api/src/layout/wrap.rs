//! Greedy word wrap against static font metrics.

use crate::layout::font_metrics::FontMetricTable;

/// Splits `text` on whitespace and packs words greedily into lines no wider than
/// `max_width_pt` at `size_pt`.
///
/// A word wider than the line sits alone on its own line and is never split.
/// Runs of whitespace collapse to a single space. Whitespace-only text yields no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let space_w = metrics.space_width * size_pt;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_pt(word, size_pt);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width_pt {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
