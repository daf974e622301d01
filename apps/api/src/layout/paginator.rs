//! Paginated Layout Renderer: turns a classified résumé into fixed-size pages of
//! positioned text runs.
//!
//! # Coordinates
//! Points from the top-left corner. A run's `y` is its baseline. The PDF writer flips
//! the axis when it encodes the page.
//!
//! # Pagination
//! Before every emitted sub-line the cursor checks `y + line_height > page_height −
//! margin_bottom`; when it trips, a new page starts at `y = margin_top`. Wrapped
//! paragraphs may therefore split across pages mid-paragraph. Blank lines only move
//! the cursor, so a trailing blank can be what forces the next break.

use serde::{Deserialize, Serialize};

use crate::layout::classifier::{ClassifiedLine, HeaderBlock};
use crate::layout::font_metrics::{get_metrics, FontMetricTable, FontWeight};
use crate::layout::geometry::PageGeometry;
use crate::layout::strings::Strings;
use crate::layout::template::{Rgb, TemplateStyle};
use crate::layout::wrap::wrap_text;

const BULLET_GLYPH: &str = "•";
const CALLOUT_PADDING: f32 = 8.0;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// What a run is, so consumers can tell content from decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunRole {
    Name,
    Subtitle,
    Contact,
    TargetLabel,
    TargetRole,
    Heading,
    BulletGlyph,
    Bullet,
    Paragraph,
}

impl RunRole {
    /// True for runs produced from the classified remainder (not header, glyphs or target).
    pub fn is_body_content(self) -> bool {
        matches!(self, RunRole::Heading | RunRole::Bullet | RunRole::Paragraph)
    }
}

/// One positioned piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub weight: FontWeight,
    pub size: f32,
    pub color: Rgb,
    pub role: RunRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Horizontal rule from `x1` to `x2` at `y`.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Rgb,
    },
    /// Filled and stroked box; `y` is the top edge.
    Box {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgb,
        stroke: Rgb,
    },
}

/// One physical page. Shapes are drawn beneath the runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub runs: Vec<TextRun>,
    pub shapes: Vec<Shape>,
}

impl Page {
    fn new(number: usize) -> Self {
        Page {
            number,
            runs: Vec::new(),
            shapes: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

/// Vertical position plus the page being filled. Lives for one `render` call.
struct RenderCursor<'g> {
    geometry: &'g PageGeometry,
    done: Vec<Page>,
    page: Page,
    y: f32,
}

impl<'g> RenderCursor<'g> {
    fn new(geometry: &'g PageGeometry) -> Self {
        RenderCursor {
            geometry,
            done: Vec::new(),
            page: Page::new(1),
            y: geometry.margin_top,
        }
    }

    fn at_page_top(&self) -> bool {
        self.y <= self.geometry.margin_top
    }

    /// Breaks to a new page when `height` does not fit below the cursor.
    /// A fresh page is never broken again, even if the block is taller than the page.
    fn ensure_room(&mut self, height: f32) {
        if self.y + height > self.geometry.bottom_limit() && !self.at_page_top() {
            let next = Page::new(self.page.number + 1);
            self.done.push(std::mem::replace(&mut self.page, next));
            self.y = self.geometry.margin_top;
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    fn push_run(&mut self, run: TextRun) {
        self.page.runs.push(run);
    }

    fn push_shape(&mut self, shape: Shape) {
        self.page.shapes.push(shape);
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.page);
        self.done
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

struct Renderer<'a> {
    geometry: &'a PageGeometry,
    style: &'a TemplateStyle,
    regular: &'static FontMetricTable,
    bold: &'static FontMetricTable,
}

/// Lays out a classified résumé. Always returns at least one page.
///
/// `target_role` is drawn between the header divider and the body and never classified.
/// When `header.name` is `None`, `strings.placeholder_name` is drawn instead.
pub fn render(
    header: &HeaderBlock,
    lines: &[ClassifiedLine],
    target_role: Option<&str>,
    geometry: &PageGeometry,
    style: &TemplateStyle,
    strings: &Strings,
) -> Vec<Page> {
    debug_assert!(
        geometry.content_width() > 0.0,
        "page geometry has no content width"
    );

    let renderer = Renderer {
        geometry,
        style,
        regular: get_metrics(style.font_family, FontWeight::Regular),
        bold: get_metrics(style.font_family, FontWeight::Bold),
    };
    let mut cursor = RenderCursor::new(geometry);

    renderer.header(&mut cursor, header, strings);

    let target_role = target_role.map(str::trim).filter(|t| !t.is_empty());
    if let Some(target) = target_role {
        if style.target_callout {
            renderer.target_callout(&mut cursor, target, strings);
        } else {
            renderer.target_section(&mut cursor, target, strings);
        }
    }

    for line in lines {
        match line {
            ClassifiedLine::Blank => cursor.advance(geometry.body_line_height),
            ClassifiedLine::Heading(text) => renderer.heading(&mut cursor, text, RunRole::Heading),
            ClassifiedLine::Bullet(body) => renderer.bullet(&mut cursor, body),
            ClassifiedLine::Paragraph(text) => {
                renderer.paragraph(&mut cursor, text, RunRole::Paragraph)
            }
        }
    }

    cursor.finish()
}

impl Renderer<'_> {
    fn metrics(&self, weight: FontWeight) -> &'static FontMetricTable {
        match weight {
            FontWeight::Regular => self.regular,
            FontWeight::Bold => self.bold,
        }
    }

    /// X for a header line: left margin, or centred when the template asks for it.
    fn header_x(&self, text: &str, weight: FontWeight, size: f32) -> f32 {
        let left = self.geometry.margin_x;
        if !self.style.center_header {
            return left;
        }
        let width = self.metrics(weight).measure_pt(text, size);
        left + ((self.geometry.content_width() - width) / 2.0).max(0.0)
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_line(
        &self,
        cursor: &mut RenderCursor<'_>,
        text: &str,
        x: f32,
        weight: FontWeight,
        size: f32,
        color: Rgb,
        role: RunRole,
        line_height: f32,
    ) {
        cursor.ensure_room(line_height);
        cursor.push_run(TextRun {
            text: text.to_string(),
            x,
            y: cursor.y,
            weight,
            size,
            color,
            role,
        });
        cursor.advance(line_height);
    }

    fn header(&self, cursor: &mut RenderCursor<'_>, header: &HeaderBlock, strings: &Strings) {
        let g = self.geometry;
        let s = self.style;

        let name = header.name.as_deref().unwrap_or(strings.placeholder_name);
        let x = self.header_x(name, FontWeight::Bold, s.name_size);
        self.emit_line(
            cursor,
            name,
            x,
            FontWeight::Bold,
            s.name_size,
            s.name_color,
            RunRole::Name,
            g.name_line_height,
        );

        if let Some(subtitle) = header.subtitle.as_deref() {
            let x = self.header_x(subtitle, FontWeight::Regular, s.subtitle_size);
            self.emit_line(
                cursor,
                subtitle,
                x,
                FontWeight::Regular,
                s.subtitle_size,
                s.muted_color,
                RunRole::Subtitle,
                g.body_line_height,
            );
        }

        for contact in &header.contacts {
            let x = self.header_x(contact, FontWeight::Regular, s.body_size);
            self.emit_line(
                cursor,
                contact,
                x,
                FontWeight::Regular,
                s.body_size,
                s.muted_color,
                RunRole::Contact,
                g.body_line_height,
            );
        }

        cursor.push_shape(Shape::Rule {
            x1: g.margin_x,
            x2: g.page_width - g.margin_x,
            y: cursor.y,
            thickness: s.rule_thickness,
            color: s.rule_color,
        });
        cursor.advance(g.divider_gap);
    }

    fn heading(&self, cursor: &mut RenderCursor<'_>, text: &str, role: RunRole) {
        cursor.advance(self.geometry.heading_gap);
        self.emit_line(
            cursor,
            text,
            self.geometry.margin_x,
            FontWeight::Bold,
            self.style.heading_size,
            self.style.heading_color,
            role,
            self.geometry.heading_line_height,
        );
    }

    fn paragraph(&self, cursor: &mut RenderCursor<'_>, text: &str, role: RunRole) {
        let g = self.geometry;
        let s = self.style;
        for sub_line in wrap_text(text, self.regular, s.body_size, g.content_width()) {
            self.emit_line(
                cursor,
                &sub_line,
                g.margin_x,
                FontWeight::Regular,
                s.body_size,
                s.text_color,
                role,
                g.body_line_height,
            );
        }
    }

    fn bullet(&self, cursor: &mut RenderCursor<'_>, body: &str) {
        let g = self.geometry;
        let s = self.style;
        let width = g.content_width() - g.bullet_indent;

        for (i, sub_line) in wrap_text(body, self.regular, s.body_size, width)
            .iter()
            .enumerate()
        {
            cursor.ensure_room(g.body_line_height);
            if i == 0 {
                cursor.push_run(TextRun {
                    text: BULLET_GLYPH.to_string(),
                    x: g.margin_x + g.bullet_glyph_offset,
                    y: cursor.y,
                    weight: FontWeight::Regular,
                    size: s.body_size,
                    color: s.text_color,
                    role: RunRole::BulletGlyph,
                });
            }
            self.emit_line(
                cursor,
                sub_line,
                g.margin_x + g.bullet_indent,
                FontWeight::Regular,
                s.body_size,
                s.text_color,
                RunRole::Bullet,
                g.body_line_height,
            );
        }
    }

    /// Plain target block: a heading-styled label followed by wrapped paragraphs.
    fn target_section(&self, cursor: &mut RenderCursor<'_>, target: &str, strings: &Strings) {
        self.heading(cursor, strings.target_role_label, RunRole::TargetLabel);
        for line in target.lines().filter(|l| !l.trim().is_empty()) {
            self.paragraph(cursor, line, RunRole::TargetRole);
        }
        cursor.advance(self.geometry.body_line_height);
    }

    /// Boxed target block. The box is kept whole on one page; if it cannot fit even
    /// on a fresh page the plain layout is used so no text is lost.
    fn target_callout(&self, cursor: &mut RenderCursor<'_>, target: &str, strings: &Strings) {
        let g = self.geometry;
        let s = self.style;
        let inner_width = g.content_width() - 2.0 * CALLOUT_PADDING;

        let wrapped: Vec<String> = target
            .lines()
            .flat_map(|l| wrap_text(l, self.regular, s.body_size, inner_width))
            .collect();
        let box_height = CALLOUT_PADDING
            + g.heading_line_height
            + wrapped.len() as f32 * g.body_line_height
            + CALLOUT_PADDING / 2.0;

        let usable = g.bottom_limit() - g.margin_top;
        if box_height > usable || inner_width <= 0.0 {
            self.target_section(cursor, target, strings);
            return;
        }

        cursor.ensure_room(box_height);
        let top = cursor.y;
        cursor.push_shape(Shape::Box {
            x: g.margin_x,
            y: top,
            width: g.content_width(),
            height: box_height,
            fill: s.callout_fill,
            stroke: s.rule_color,
        });

        // Room for the whole box was reserved above, so its lines skip the per-line check.
        let text_x = g.margin_x + CALLOUT_PADDING;
        cursor.advance(CALLOUT_PADDING + s.heading_size);
        cursor.push_run(TextRun {
            text: strings.target_role_label.to_string(),
            x: text_x,
            y: cursor.y,
            weight: FontWeight::Bold,
            size: s.heading_size,
            color: s.heading_color,
            role: RunRole::TargetLabel,
        });
        cursor.advance(g.heading_line_height);
        for line in wrapped {
            cursor.push_run(TextRun {
                text: line,
                x: text_x,
                y: cursor.y,
                weight: FontWeight::Regular,
                size: s.body_size,
                color: s.text_color,
                role: RunRole::TargetRole,
            });
            cursor.advance(g.body_line_height);
        }
        cursor.y = top + box_height + g.body_line_height;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::classifier::{classify_document, DEFAULT_HEADER_LOOKAHEAD};
    use crate::layout::geometry::{default_geometry, PageSize};
    use crate::layout::strings::{strings, Language};
    use crate::layout::template::{template_style, TemplateId};
    use proptest::prelude::*;

    fn render_text(text: &str, target: Option<&str>, template: TemplateId) -> Vec<Page> {
        render_with(text, target, template, &default_geometry(PageSize::Letter))
    }

    fn render_with(
        text: &str,
        target: Option<&str>,
        template: TemplateId,
        geometry: &PageGeometry,
    ) -> Vec<Page> {
        let style = template_style(template);
        let doc = classify_document(text, style.header_lookahead);
        render(
            &doc.header,
            &doc.lines,
            target,
            geometry,
            &style,
            strings(Language::En),
        )
    }

    fn body_runs(pages: &[Page]) -> Vec<&TextRun> {
        pages
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter(|r| r.role.is_body_content())
            .collect()
    }

    fn find_run<'p>(pages: &'p [Page], text: &str) -> &'p TextRun {
        pages
            .iter()
            .flat_map(|p| p.runs.iter())
            .find(|r| r.text == text)
            .unwrap_or_else(|| panic!("no run with text {text:?}"))
    }

    // ── header ──────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_document_renders_placeholder_header_only() {
        let pages = render_text("", None, TemplateId::Classic);
        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        assert_eq!(page.runs.len(), 1);
        assert_eq!(page.runs[0].text, "Your Name");
        assert_eq!(page.runs[0].role, RunRole::Name);
        assert_eq!(page.shapes.len(), 1);
        assert!(matches!(page.shapes[0], Shape::Rule { .. }));
    }

    #[test]
    fn test_header_lines_in_order_with_expected_advances() {
        let g = default_geometry(PageSize::Letter);
        let pages = render_text(
            "Jane Doe\nAustin, TX\njane@example.com\n\nSKILLS",
            None,
            TemplateId::Classic,
        );
        let runs = &pages[0].runs;
        assert_eq!(runs[0].role, RunRole::Name);
        assert_eq!(runs[0].y, g.margin_top);
        assert_eq!(runs[1].role, RunRole::Subtitle);
        assert_eq!(runs[1].y, g.margin_top + g.name_line_height);
        assert_eq!(runs[2].role, RunRole::Contact);
        assert_eq!(runs[2].text, "jane@example.com");
        assert_eq!(runs[2].y, runs[1].y + g.body_line_height);
    }

    #[test]
    fn test_name_line_never_appears_as_body_content() {
        let pages = render_text("JANE DOE\n\nJANE DOE", None, TemplateId::Classic);
        let body = body_runs(&pages);
        assert_eq!(body.len(), 1);
        assert_eq!(pages[0].runs[0].role, RunRole::Name);
    }

    #[test]
    fn test_federal_centres_header() {
        let g = default_geometry(PageSize::Letter);
        let pages = render_text("Jane Doe\nAustin, TX\n\nSKILLS", None, TemplateId::Federal);
        assert!(pages[0].runs[0].x > g.margin_x);
        assert_eq!(find_run(&pages, "SKILLS").x, g.margin_x);
    }

    // ── body ────────────────────────────────────────────────────────────────

    #[test]
    fn test_reference_document_run_roles() {
        let pages = render_text(
            "Jane Doe\nAustin, TX\n\nEXPERIENCE\n• Did a thing\nSKILLS\nBilingual",
            None,
            TemplateId::Classic,
        );
        let roles: Vec<RunRole> = pages[0].runs.iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![
                RunRole::Name,
                RunRole::Subtitle,
                RunRole::Heading,
                RunRole::BulletGlyph,
                RunRole::Bullet,
                RunRole::Heading,
                RunRole::Paragraph,
            ]
        );
        assert_eq!(find_run(&pages, "Did a thing").role, RunRole::Bullet);
    }

    #[test]
    fn test_long_paragraph_wraps_to_many_runs_within_width() {
        let mut geometry = default_geometry(PageSize::Letter);
        geometry.page_width = 400.0;
        geometry.margin_x = 50.0;
        let mut style = template_style(TemplateId::Classic);
        style.body_size = 10.0;

        let paragraph = "word ".repeat(100);
        assert_eq!(paragraph.len(), 500);
        let doc = classify_document(&format!("Jane\n\n{paragraph}"), DEFAULT_HEADER_LOOKAHEAD);
        let pages = render(
            &doc.header,
            &doc.lines,
            None,
            &geometry,
            &style,
            strings(Language::En),
        );

        let runs = body_runs(&pages);
        assert!(runs.len() >= 8, "expected ≥8 wrapped runs, got {}", runs.len());
        let metrics = get_metrics(style.font_family, FontWeight::Regular);
        for run in runs {
            assert!(metrics.measure_pt(&run.text, run.size) <= geometry.content_width());
        }
    }

    #[test]
    fn test_wrapped_bullet_has_one_glyph_and_aligned_continuations() {
        let g = default_geometry(PageSize::Letter);
        let body = "Coordinated cross-functional delivery ".repeat(8);
        let pages = render_text(&format!("Jane\n\n• {body}"), None, TemplateId::Classic);

        let glyphs: Vec<&TextRun> = pages[0]
            .runs
            .iter()
            .filter(|r| r.role == RunRole::BulletGlyph)
            .collect();
        let texts: Vec<&TextRun> = pages[0]
            .runs
            .iter()
            .filter(|r| r.role == RunRole::Bullet)
            .collect();

        assert_eq!(glyphs.len(), 1);
        assert!(texts.len() > 1);
        assert_eq!(glyphs[0].y, texts[0].y);
        assert_eq!(glyphs[0].x, g.margin_x + g.bullet_glyph_offset);
        for run in &texts {
            assert_eq!(run.x, g.margin_x + g.bullet_indent);
        }
    }

    #[test]
    fn test_two_blank_lines_reserve_two_body_lines() {
        let g = default_geometry(PageSize::Letter);
        let pages = render_text(
            "Jane\n\nLine A\n\n\nLine B\n\n\nSKILLS",
            None,
            TemplateId::Classic,
        );
        let a = find_run(&pages, "Line A").y;
        let b = find_run(&pages, "Line B").y;
        let skills = find_run(&pages, "SKILLS").y;

        // Own advance + two blank lines.
        assert!((b - a - 3.0 * g.body_line_height).abs() < 1e-3);
        // Same, plus the heading gap.
        assert!((skills - b - 3.0 * g.body_line_height - g.heading_gap).abs() < 1e-3);
    }

    #[test]
    fn test_line_conservation() {
        let text = "Jane\nAustin\n\nEXPERIENCE\nAnalyst, Acme\n- Built reports\n\nSKILLS\nExcel\n• SQL";
        let pages = render_text(text, None, TemplateId::Classic);
        // 6 non-blank remainder lines, none long enough to wrap.
        assert_eq!(body_runs(&pages).len(), 6);
    }

    // ── target role ─────────────────────────────────────────────────────────

    #[test]
    fn test_federal_target_role_draws_callout_box() {
        let pages = render_text(
            "Jane Doe\n\nEXPERIENCE",
            Some("Program Analyst, GS-0343-11"),
            TemplateId::Federal,
        );
        let page = &pages[0];
        assert!(page.shapes.iter().any(|s| matches!(s, Shape::Box { .. })));
        assert_eq!(find_run(&pages, "TARGET POSITION").role, RunRole::TargetLabel);
        let target = find_run(&pages, "Program Analyst, GS-0343-11");
        assert_eq!(target.role, RunRole::TargetRole);
        assert!(find_run(&pages, "EXPERIENCE").y > target.y);
    }

    #[test]
    fn test_classic_target_role_is_plain_section() {
        let pages = render_text("Jane Doe\n\nEXPERIENCE", Some("Data Analyst"), TemplateId::Classic);
        assert!(!pages[0].shapes.iter().any(|s| matches!(s, Shape::Box { .. })));
        assert_eq!(find_run(&pages, "Data Analyst").role, RunRole::TargetRole);
    }

    #[test]
    fn test_blank_target_role_is_ignored() {
        let with_blank = render_text("Jane", Some("   "), TemplateId::Federal);
        let without = render_text("Jane", None, TemplateId::Federal);
        assert_eq!(with_blank, without);
    }

    #[test]
    fn test_target_role_language_label() {
        let style = template_style(TemplateId::Classic);
        let doc = classify_document("Ana", style.header_lookahead);
        let pages = render(
            &doc.header,
            &doc.lines,
            Some("Analista"),
            &default_geometry(PageSize::Letter),
            &style,
            strings(Language::Es),
        );
        assert_eq!(find_run(&pages, "PUESTO OBJETIVO").role, RunRole::TargetLabel);
    }

    // ── pagination ──────────────────────────────────────────────────────────

    fn long_resume(items: usize) -> String {
        let mut text = String::from("Jane Doe\nAustin, TX\n\nEXPERIENCE\n");
        for i in 0..items {
            text.push_str(&format!("• Delivered project number {i} on schedule\n"));
            if i % 10 == 9 {
                text.push_str("\nMORE EXPERIENCE\n");
            }
        }
        text
    }

    #[test]
    fn test_long_document_paginates() {
        let g = default_geometry(PageSize::Letter);
        let pages = render_text(&long_resume(150), None, TemplateId::Classic);
        assert!(pages.len() >= 3, "expected several pages, got {}", pages.len());

        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.number, i + 1);
            assert!(!page.runs.is_empty());
            for run in &page.runs {
                assert!(run.y + g.body_line_height <= g.bottom_limit() + 1e-3);
            }
        }
        for page in &pages[1..] {
            assert_eq!(page.runs[0].y, g.margin_top);
        }
        assert_eq!(body_runs(&pages).len(), 150 + 1 + 15);
    }

    #[test]
    fn test_blank_line_before_break_forces_break() {
        let g = default_geometry(PageSize::Letter);
        let text = page_one_with_one_line_left();

        // Exactly one body line of room is left.
        let fits = render_text(&format!("{text}last line"), None, TemplateId::Classic);
        assert_eq!(fits.len(), 1);

        let breaks = render_text(&format!("{text}\nlast line"), None, TemplateId::Classic);
        assert_eq!(breaks.len(), 2);
        assert_eq!(find_run(&breaks, "last line").y, g.margin_top);
    }

    /// Classic-template text whose last filler leaves exactly one body line on page 1.
    fn page_one_with_one_line_left() -> String {
        let g = default_geometry(PageSize::Letter);
        let body_start = g.margin_top + g.name_line_height + g.divider_gap + g.body_line_height;
        let fillers = ((g.bottom_limit() - body_start) / g.body_line_height).floor() as usize - 1;
        let mut text = String::from("Jane\n\n");
        for i in 0..fillers {
            text.push_str(&format!("filler {i}\n"));
        }
        text
    }

    #[test]
    fn test_wrapped_bullet_splits_across_page_break() {
        let g = default_geometry(PageSize::Letter);
        let style = template_style(TemplateId::Classic);
        let body = "Coordinated cross-functional delivery of quarterly reporting ".repeat(6);
        let expected = wrap_text(
            &body,
            get_metrics(style.font_family, FontWeight::Regular),
            style.body_size,
            g.content_width() - g.bullet_indent,
        );
        assert!(expected.len() >= 3);

        let pages = render_text(
            &format!("{}• {body}", page_one_with_one_line_left()),
            None,
            TemplateId::Classic,
        );
        assert_eq!(pages.len(), 2);

        let bullets = |page: &Page| -> Vec<String> {
            page.runs
                .iter()
                .filter(|r| r.role == RunRole::Bullet)
                .map(|r| r.text.clone())
                .collect()
        };
        let on_first = bullets(&pages[0]);
        let on_second = bullets(&pages[1]);
        assert_eq!(on_first.len(), 1);
        assert_eq!(on_second.len(), expected.len() - 1);
        assert_eq!([on_first, on_second].concat(), expected);

        let glyphs: Vec<&TextRun> = pages
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter(|r| r.role == RunRole::BulletGlyph)
            .collect();
        assert_eq!(glyphs.len(), 1);
        assert!(pages[0].runs.iter().any(|r| r.role == RunRole::BulletGlyph));

        assert_eq!(pages[1].runs[0].y, g.margin_top);
        assert_eq!(pages[1].runs[0].x, g.margin_x + g.bullet_indent);
    }

    #[test]
    fn test_wrapped_paragraph_splits_across_page_break() {
        let g = default_geometry(PageSize::Letter);
        let style = template_style(TemplateId::Classic);
        let paragraph = "Managed vendor relationships and budget forecasting ".repeat(6);
        let expected = wrap_text(
            &paragraph,
            get_metrics(style.font_family, FontWeight::Regular),
            style.body_size,
            g.content_width(),
        );
        assert!(expected.len() >= 3);

        let pages = render_text(
            &format!("{}{paragraph}", page_one_with_one_line_left()),
            None,
            TemplateId::Classic,
        );
        assert_eq!(pages.len(), 2);

        let split: Vec<&TextRun> = pages
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter(|r| r.role == RunRole::Paragraph && !r.text.starts_with("filler"))
            .collect();
        let texts: Vec<&str> = split.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, expected);

        assert_eq!(pages[1].runs.len(), expected.len() - 1);
        assert_eq!(pages[1].runs[0].text, expected[1]);
        assert_eq!(pages[1].runs[0].y, g.margin_top);
    }

    proptest! {
        #[test]
        fn prop_render_is_idempotent(
            lines in prop::collection::vec("(• |- )?[A-Za-z ]{0,60}", 0..60),
            federal in any::<bool>(),
        ) {
            let text = lines.join("\n");
            let template = if federal { TemplateId::Federal } else { TemplateId::Classic };
            let first = render_text(&text, Some("Analyst"), template);
            let second = render_text(&text, Some("Analyst"), template);
            prop_assert!(!first.is_empty());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_y_is_monotonic_within_each_page(
            lines in prop::collection::vec("(• |- )?[A-Za-z ]{0,120}", 0..200),
        ) {
            let g = default_geometry(PageSize::Letter);
            let pages = render_text(&lines.join("\n"), None, TemplateId::Classic);
            for page in &pages {
                for pair in page.runs.windows(2) {
                    prop_assert!(pair[0].y <= pair[1].y);
                }
            }
            for page in pages.iter().skip(1) {
                prop_assert_eq!(page.runs[0].y, g.margin_top);
            }
        }
    }
}
