//! HTML preview of a classified résumé.
//!
//! Built from the same classification as the PDF so the on-screen preview and the
//! download agree on what is a heading, a bullet, or a paragraph. Pagination is a
//! print concern and is not reproduced here.

use crate::layout::font_metrics::FontFamily;
use crate::layout::strings::Strings;
use crate::layout::template::TemplateStyle;
use crate::layout::{ClassifiedDocument, ClassifiedLine};

/// Renders a self-contained `<article>` fragment with inline styles.
pub fn preview_html(
    doc: &ClassifiedDocument,
    target_role: Option<&str>,
    style: &TemplateStyle,
    strings: &Strings,
) -> String {
    let mut html = String::new();
    let family = match style.font_family {
        FontFamily::Helvetica => "Helvetica, Arial, sans-serif",
        FontFamily::Times => "'Times New Roman', Times, serif",
    };
    html.push_str(&format!(
        "<article class=\"resume template-{}\" style=\"font-family: {family}; font-size: {}pt; color: {};\">\n",
        style.id.as_str(),
        style.body_size,
        style.text_color.hex(),
    ));

    // Header
    let align = if style.center_header { "center" } else { "left" };
    html.push_str(&format!("<header style=\"text-align: {align};\">\n"));
    let name = doc
        .header
        .name
        .as_deref()
        .unwrap_or(strings.placeholder_name);
    html.push_str(&format!(
        "<h1 style=\"font-size: {}pt; color: {}; margin: 0;\">{}</h1>\n",
        style.name_size,
        style.name_color.hex(),
        escape_html(name)
    ));
    if let Some(subtitle) = &doc.header.subtitle {
        html.push_str(&format!(
            "<p class=\"subtitle\" style=\"font-size: {}pt; margin: 0;\">{}</p>\n",
            style.subtitle_size,
            escape_html(subtitle)
        ));
    }
    for contact in &doc.header.contacts {
        html.push_str(&format!(
            "<p class=\"contact\" style=\"color: {}; margin: 0;\">{}</p>\n",
            style.muted_color.hex(),
            escape_html(contact)
        ));
    }
    html.push_str("</header>\n");
    html.push_str(&format!(
        "<hr style=\"border: 0; border-top: {}pt solid {};\">\n",
        style.rule_thickness,
        style.rule_color.hex()
    ));

    // Target role
    if let Some(target) = target_role.map(str::trim).filter(|t| !t.is_empty()) {
        if style.target_callout {
            html.push_str(&format!(
                "<section class=\"target callout\" style=\"background: {}; border: 1px solid {}; padding: 8pt;\">\n",
                style.callout_fill.hex(),
                style.rule_color.hex()
            ));
        } else {
            html.push_str("<section class=\"target\">\n");
        }
        push_heading(&mut html, strings.target_role_label, style);
        for line in target.lines().filter(|l| !l.trim().is_empty()) {
            html.push_str(&format!("<p>{}</p>\n", escape_html(line.trim())));
        }
        html.push_str("</section>\n");
    }

    // Body
    let mut in_list = false;
    for line in &doc.lines {
        let is_bullet = matches!(line, ClassifiedLine::Bullet(_));
        if in_list && !is_bullet {
            html.push_str("</ul>\n");
            in_list = false;
        }
        match line {
            ClassifiedLine::Blank => html.push_str("<div class=\"spacer\">&nbsp;</div>\n"),
            ClassifiedLine::Heading(text) => push_heading(&mut html, text, style),
            ClassifiedLine::Bullet(text) => {
                if !in_list {
                    html.push_str("<ul>\n");
                    in_list = true;
                }
                html.push_str(&format!("<li>{}</li>\n", escape_html(text)));
            }
            ClassifiedLine::Paragraph(text) => {
                html.push_str(&format!("<p>{}</p>\n", escape_html(text)));
            }
        }
    }
    if in_list {
        html.push_str("</ul>\n");
    }

    html.push_str("</article>\n");
    html
}

fn push_heading(html: &mut String, text: &str, style: &TemplateStyle) {
    html.push_str(&format!(
        "<h2 style=\"font-size: {}pt; color: {};\">{}</h2>\n",
        style.heading_size,
        style.heading_color.hex(),
        escape_html(text)
    ));
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
