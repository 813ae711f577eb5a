use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::{Report, ReportSection, TableSection};
use crate::ui::messages::info;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Average glyph width of Helvetica, in em.
const GLYPH_EM: f32 = 0.5;
const BOLD_GLYPH_EM: f32 = 0.56;

type Rgb = (f32, f32, f32);

const BLACK: Rgb = (0.0, 0.0, 0.0);
const ZEBRA: Rgb = (0.95, 0.95, 0.95);
const BORDER: Rgb = (0.65, 0.65, 0.65);

fn rgb(hex: u32) -> Rgb {
    let c = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    (c(16), c(8), c(0))
}

/// Type1 base fonts only cover Latin-1-ish glyphs.
fn pdf_text(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

fn text_width(s: &str, size: f32, em: f32) -> f32 {
    s.chars().count() as f32 * size * em
}

/// Flowing A4 document writer: headings, statements and paged tables.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    page: Option<(Ref, Content)>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,
    y: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // hand-managed object ids
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            page: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 18.0,
            line_h: 15.0,
            y: 0.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn start_page(&mut self) {
        self.finish_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources()
            .fonts()
            .pair(REGULAR, self.font_id)
            .pair(BOLD, self.bold_font_id);
        drop(page);

        self.page = Some((content_id, Content::new()));
        self.y = self.page_h - self.margin;
    }

    /// Write the page number and flush the current page stream.
    fn finish_page(&mut self) {
        if let Some((id, mut content)) = self.page.take() {
            let label = format!("Page {}", self.page_refs.len());
            draw_text(
                &mut content,
                REGULAR,
                BLACK,
                self.page_w - self.margin - 40.0,
                self.margin - 30.0,
                self.font_size - 1.0,
                &label,
            );
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Move down by `h`, opening a new page when it would not fit.
    fn advance(&mut self, h: f32) {
        if self.page.is_none() || self.y - h < self.margin {
            self.start_page();
        }
        self.y -= h;
    }

    fn content(&mut self) -> Option<&mut Content> {
        self.page.as_mut().map(|(_, c)| c)
    }

    fn usable_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    pub fn write_heading(&mut self, text: &str, size: f32) {
        self.advance(size + 8.0);
        let (x, y) = (self.margin, self.y);
        if let Some(content) = self.content() {
            draw_text(content, BOLD, BLACK, x, y, size, text);
        }
    }

    pub fn write_line(&mut self, text: &str) {
        self.advance(self.line_h);
        let (x, y, size) = (self.margin, self.y, self.font_size);
        if let Some(content) = self.content() {
            draw_text(content, REGULAR, BLACK, x, y, size, text);
        }
    }

    /// Bold `label:` followed by the value, wrapped to the page width.
    pub fn write_statement(&mut self, label: &str, value: &str) {
        let label = format!("{label}: ");
        let label_w = text_width(&label, self.font_size, BOLD_GLYPH_EM);

        let max_chars = (self.usable_width() / (self.font_size * GLYPH_EM)) as usize;
        let indent_chars = (label_w / (self.font_size * GLYPH_EM)).ceil() as usize;
        let indent = " ".repeat(indent_chars);

        let options = textwrap::Options::new(max_chars.max(indent_chars + 10)).initial_indent(&indent);
        let mut lines = textwrap::wrap(value, options);
        if lines.is_empty() {
            lines.push(Cow::Borrowed(""));
        }

        for (i, line) in lines.iter().enumerate() {
            self.advance(self.line_h);
            let (x, y, size) = (self.margin, self.y, self.font_size);
            let Some(content) = self.content() else {
                continue;
            };

            if i == 0 {
                draw_text(content, BOLD, BLACK, x, y, size, &label);
                draw_text(content, REGULAR, BLACK, x + label_w, y, size, line.trim_start());
            } else {
                draw_text(content, REGULAR, BLACK, x, y, size, line);
            }
        }
    }

    /// Column widths from header + content, scaled down to the page.
    fn compute_col_widths(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| text_width(h, self.header_font_size, BOLD_GLYPH_EM) + 10.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(text_width(cell, self.font_size, GLYPH_EM) + 10.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.usable_width();

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_header_row(&mut self, headers: &[String], col_widths: &[f32]) {
        let style = TableSection::HEADER_STYLE;
        let font = if style.bold { BOLD } else { REGULAR };

        self.advance(self.row_h);
        let (x, y, h, size) = (self.margin, self.y, self.row_h, self.header_font_size);
        if let Some(content) = self.content() {
            fill_rect(content, rgb(style.background), x, y, col_widths.iter().sum(), h);
            draw_row(content, font, rgb(style.foreground), x, y, h, col_widths, headers, size);
        }
    }

    /// Table with a bold caption; the header repeats on every page.
    pub fn write_table(&mut self, table: &TableSection) {
        self.advance(self.line_h / 2.0);
        self.write_heading(&table.caption, self.header_font_size);

        let col_widths = self.compute_col_widths(&table.columns, &table.rows);
        self.draw_header_row(&table.columns, &col_widths);

        if table.rows.is_empty() {
            self.write_line("(none)");
        }

        for (i, row) in table.rows.iter().enumerate() {
            if self.y - self.row_h < self.margin {
                self.start_page();
                self.draw_header_row(&table.columns, &col_widths);
            }

            self.advance(self.row_h);
            let (x, y, h, size) = (self.margin, self.y, self.row_h, self.font_size);
            let Some(content) = self.content() else {
                continue;
            };

            if i % 2 == 1 {
                fill_rect(content, ZEBRA, x, y, col_widths.iter().sum(), h);
            }
            draw_row(content, REGULAR, BLACK, x, y, h, &col_widths, row, size);
        }

        self.advance(self.line_h / 2.0);
    }

    /// Lay out a whole report.
    pub fn render(report: &Report) -> Self {
        let mut pdf = Self::new();

        pdf.write_heading(&report.title, pdf.title_font_size);
        pdf.write_line(&report.period_label);
        pdf.advance(pdf.line_h / 2.0);

        for section in &report.sections {
            match section {
                ReportSection::Statement { label, value, .. } => pdf.write_statement(label, value),
                ReportSection::Table(table) => pdf.write_table(table),
            }
        }

        pdf
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        if self.page_refs.is_empty() {
            self.start_page();
        }
        self.finish_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn draw_text(content: &mut Content, font: Name, color: Rgb, x: f32, y: f32, size: f32, text: &str) {
    let bytes = pdf_text(text);
    content.save_state();
    content.set_fill_rgb(color.0, color.1, color.2);
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&bytes));
    content.end_text();
    content.restore_state();
}

fn fill_rect(content: &mut Content, color: Rgb, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_fill_rgb(color.0, color.1, color.2);
    content.rect(x, y, w, h);
    content.fill_nonzero();
    content.restore_state();
}

/// Cells are clipped with ".." when wider than their column.
#[allow(clippy::too_many_arguments)]
fn draw_row(
    content: &mut Content,
    font: Name,
    color: Rgb,
    x_start: f32,
    y: f32,
    h: f32,
    col_widths: &[f32],
    row: &[String],
    size: f32,
) {
    let mut x = x_start;

    for (w, text) in col_widths.iter().zip(row) {
        let max_chars = ((w - 8.0) / (size * GLYPH_EM)).max(1.0) as usize;
        let cell: Cow<str> = if text.chars().count() > max_chars {
            let cut: String = text.chars().take(max_chars.saturating_sub(2)).collect();
            Cow::Owned(format!("{cut}.."))
        } else {
            Cow::Borrowed(text)
        };

        draw_text(content, font, color, x + 4.0, y + 5.0, size, &cell);

        content.save_state();
        content.set_stroke_rgb(BORDER.0, BORDER.1, BORDER.2);
        content.rect(x, y, *w, h);
        content.stroke();
        content.restore_state();

        x += w;
    }
}

/// Export PDF using PdfManager.
pub(crate) fn export_pdf(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    PdfManager::render(report)
        .save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
