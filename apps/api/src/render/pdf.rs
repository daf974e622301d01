//! PDF encoding of laid-out pages with `lopdf`.
//!
//! Uses the standard Type1 faces (not embedded) with WinAnsiEncoding, so text is
//! transcoded to single bytes; characters outside that code page become `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::layout::font_metrics::{get_metrics, FontWeight};
use crate::layout::template::{Rgb, TemplateStyle};
use crate::layout::{Page, PageGeometry, Shape, TextRun};
use crate::render::RenderError;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const BOX_STROKE_WIDTH: f32 = 0.8;

/// Encodes pages as a complete PDF file.
pub fn encode_pdf(
    pages: &[Page],
    geometry: &PageGeometry,
    style: &TemplateStyle,
    title: &str,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(
        get_metrics(style.font_family, FontWeight::Regular).base_font,
    ));
    let bold_id = doc.add_object(font_dictionary(
        get_metrics(style.font_family, FontWeight::Bold).base_font,
    ));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular_id,
            FONT_BOLD => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page, geometry).encode()?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                geometry.page_width.into(),
                geometry.page_height.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal(concat!("resume-render ", env!("CARGO_PKG_VERSION"))),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn font_dictionary(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// PDF user space has its origin at the bottom-left; layout uses top-left.
fn flip(geometry: &PageGeometry, y: f32) -> f32 {
    geometry.page_height - y
}

fn color_operands(color: Rgb) -> Vec<Object> {
    color.unit().into_iter().map(Object::from).collect()
}

fn page_content(page: &Page, geometry: &PageGeometry) -> Content {
    let mut operations = Vec::new();

    for shape in &page.shapes {
        match *shape {
            Shape::Rule {
                x1,
                x2,
                y,
                thickness,
                color,
            } => {
                let y = flip(geometry, y);
                operations.extend([
                    Operation::new("q", vec![]),
                    Operation::new("RG", color_operands(color)),
                    Operation::new("w", vec![thickness.into()]),
                    Operation::new("m", vec![x1.into(), y.into()]),
                    Operation::new("l", vec![x2.into(), y.into()]),
                    Operation::new("S", vec![]),
                    Operation::new("Q", vec![]),
                ]);
            }
            Shape::Box {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let bottom = flip(geometry, y + height);
                operations.extend([
                    Operation::new("q", vec![]),
                    Operation::new("rg", color_operands(fill)),
                    Operation::new("RG", color_operands(stroke)),
                    Operation::new("w", vec![BOX_STROKE_WIDTH.into()]),
                    Operation::new(
                        "re",
                        vec![x.into(), bottom.into(), width.into(), height.into()],
                    ),
                    Operation::new("B", vec![]),
                    Operation::new("Q", vec![]),
                ]);
            }
        }
    }

    for run in &page.runs {
        operations.extend(text_operations(run, geometry));
    }

    Content { operations }
}

fn text_operations(run: &TextRun, geometry: &PageGeometry) -> Vec<Operation> {
    let font = match run.weight {
        FontWeight::Regular => FONT_REGULAR,
        FontWeight::Bold => FONT_BOLD,
    };
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), run.size.into()],
        ),
        Operation::new("rg", color_operands(run.color)),
        Operation::new("Td", vec![run.x.into(), flip(geometry, run.y).into()]),
        Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&run.text),
                StringFormat::Literal,
            )],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// Transcodes text to WinAnsi (CP-1252) bytes for the standard fonts.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\t' => b' ',
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}
