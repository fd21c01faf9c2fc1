use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

// A4 in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const LINE_SPACING: f32 = 1.4;
// Average Helvetica glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// One run of text in a single font.
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    text: String,
    bold: bool,
}

/// Lay out rendered report text as a PDF document.
///
/// Accepts the same Markdown subset as [`crate::docx::generate_docx`].
/// Text is set in the standard Type 1 fonts, so no font files are embedded;
/// characters outside WinAnsi are replaced with `?`.
pub fn generate_pdf(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut writer = PageWriter::new();
    let body = styles.body_size as f32;
    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('|') {
            if !is_separator_row(trimmed) {
                table_rows.push(split_row(trimmed));
            }
            continue;
        }
        if !table_rows.is_empty() {
            writer.table(&table_rows, body);
            table_rows.clear();
        }

        if trimmed.is_empty() {
            writer.gap(body * 0.6);
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            writer.heading(text, styles.heading3_size as f32);
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            writer.heading(text, styles.heading2_size as f32);
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            writer.heading(text, styles.heading1_size as f32);
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            writer.paragraph(text, body, "\u{2022} ");
        } else if trimmed == "---" {
            writer.break_page();
        } else {
            writer.paragraph(trimmed, body, "");
        }
    }

    if !table_rows.is_empty() {
        writer.table(&table_rows, body);
    }

    assemble(writer.finish(), styles)
}

/// Accumulates content-stream operations page by page, top to bottom.
struct PageWriter {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.ops));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.break_page();
        }
    }

    fn text_line(&mut self, x: f32, size: f32, segments: &[Segment]) {
        let leading = size * LINE_SPACING;
        self.ensure_room(leading);
        self.y -= leading;

        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
        for segment in segments {
            let font = if segment.bold { BOLD } else { REGULAR };
            self.ops
                .push(Operation::new("Tf", vec![font.into(), size.into()]));
            self.ops.push(Operation::new(
                "Tj",
                vec![Object::string_literal(win_ansi(&segment.text))],
            ));
        }
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn heading(&mut self, text: &str, size: f32) {
        self.gap(size * 0.3);
        let segment = Segment {
            text: text.to_string(),
            bold: true,
        };
        for line in wrap(&[segment], max_chars(PAGE_WIDTH - 2.0 * MARGIN, size)) {
            self.text_line(MARGIN, size, &line);
        }
    }

    fn paragraph(&mut self, text: &str, size: f32, marker: &str) {
        let indent = if marker.is_empty() { 0.0 } else { size * 1.2 };
        let width = PAGE_WIDTH - 2.0 * MARGIN - indent;
        for (i, mut line) in wrap(&parse_inline(text), max_chars(width, size))
            .into_iter()
            .enumerate()
        {
            let x = if i == 0 && !marker.is_empty() {
                line.insert(
                    0,
                    Segment {
                        text: marker.to_string(),
                        bold: false,
                    },
                );
                MARGIN
            } else {
                MARGIN + indent
            };
            self.text_line(x, size, &line);
        }
    }

    /// Cells share the width evenly; the first row is set in bold.
    fn table(&mut self, rows: &[Vec<String>], size: f32) {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(1).max(1);
        let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / columns as f32;
        let leading = size * LINE_SPACING;

        for (i, cells) in rows.iter().enumerate() {
            self.ensure_room(leading);
            self.y -= leading;
            self.ops.push(Operation::new("BT", vec![]));
            let font = if i == 0 { BOLD } else { REGULAR };
            self.ops
                .push(Operation::new("Tf", vec![font.into(), size.into()]));
            let mut previous_x = 0.0;
            for (column, cell) in cells.iter().enumerate() {
                let x = MARGIN + column as f32 * column_width;
                let dy = if column == 0 { self.y } else { 0.0 };
                self.ops
                    .push(Operation::new("Td", vec![(x - previous_x).into(), dy.into()]));
                previous_x = x;
                let fitted: String = cell.chars().take(max_chars(column_width, size)).collect();
                self.ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(win_ansi(&fitted))],
                ));
            }
            self.ops.push(Operation::new("ET", vec![]));
        }
        self.gap(size * 0.6);
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.ops.is_empty() || self.pages.is_empty() {
            self.pages.push(self.ops);
        }
        self.pages
    }
}

fn assemble(pages: Vec<Vec<Operation>>, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(&styles.body_font));
    let bold_id = doc.add_object(font_dictionary(&format!("{}-Bold", styles.heading_font)));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR => regular_id,
            BOLD => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id: ObjectId = doc.add_object(dictionary! {
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
                Object::from(0),
                Object::from(0),
                Object::from(PAGE_WIDTH),
                Object::from(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(buf)
}

fn font_dictionary(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(base_font.as_bytes().to_vec()),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn max_chars(width: f32, size: f32) -> usize {
    ((width / (size * GLYPH_WIDTH)) as usize).max(1)
}

/// Map text onto WinAnsiEncoding bytes.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2014}' => 0x97,
            '\u{2013}' => 0x96,
            '\u{2022}' => 0x95,
            '\u{2019}' => 0x92,
            '\u{2018}' => 0x91,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Greedy word wrap that keeps each word's font.
fn wrap(segments: &[Segment], max_chars: usize) -> Vec<Vec<Segment>> {
    let mut lines: Vec<Vec<Segment>> = Vec::new();
    let mut current: Vec<Segment> = Vec::new();
    let mut width = 0;
    let mut spaced = false;

    for segment in segments {
        for (i, word) in segment.text.split(' ').enumerate() {
            if i > 0 {
                spaced = true;
            }
            if word.is_empty() {
                continue;
            }

            let word_len = word.chars().count();
            if width > 0 && width + word_len + usize::from(spaced) > max_chars {
                lines.push(std::mem::take(&mut current));
                width = 0;
            }
            let text = if spaced && width > 0 {
                format!(" {word}")
            } else {
                word.to_string()
            };
            spaced = false;
            width += text.chars().count();

            match current.last_mut() {
                Some(last) if last.bold == segment.bold => last.text.push_str(&text),
                _ => current.push(Segment {
                    text,
                    bold: segment.bold,
                }),
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn is_separator_row(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn split_row(line: &str) -> Vec<String> {
    line.trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Split `**bold**` segments. An unclosed `**` leaves the rest of the line
/// as plain text.
fn parse_inline(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            segments.push(Segment {
                text: before.to_string(),
                bold: false,
            });
        }

        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            segments.push(Segment {
                text: remaining.to_string(),
                bold: false,
            });
            return segments;
        };
        segments.push(Segment {
            text: after_start[..end].to_string(),
            bold: true,
        });
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        segments.push(Segment {
            text: remaining.to_string(),
            bold: false,
        });
    }
    segments
}
