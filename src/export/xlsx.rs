// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::{ColumnKind, Report, ReportSection, TableSection};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_COL_WIDTH: usize = 60;

/// Export XLSX: statements as label/value rows, tables with emphasized
/// headers and banded rows, column widths fitted to content.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Report").map_err(to_export_error)?;

    let mut sheet = SheetWriter::new(worksheet);

    let title_format = Format::new().set_bold().set_font_size(14);
    sheet.write_text(0, &report.title, &title_format)?;
    sheet.row += 1;
    sheet.write_text(0, &report.period_label, &Format::new().set_italic())?;
    sheet.row += 2;

    for section in &report.sections {
        match section {
            ReportSection::Statement {
                label,
                value,
                emphasized,
            } => sheet.write_statement(label, value, *emphasized)?,
            ReportSection::Table(table) => sheet.write_table(table)?,
        }
    }

    sheet.apply_column_widths()?;

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

struct SheetWriter<'a> {
    worksheet: &'a mut Worksheet,
    row: u32,
    col_widths: Vec<usize>,
}

impl<'a> SheetWriter<'a> {
    fn new(worksheet: &'a mut Worksheet) -> Self {
        Self {
            worksheet,
            row: 0,
            col_widths: Vec::new(),
        }
    }

    fn track_width(&mut self, col: usize, s: &str) {
        if self.col_widths.len() <= col {
            self.col_widths.resize(col + 1, 0);
        }
        let w = UnicodeWidthStr::width(s).min(MAX_COL_WIDTH);
        self.col_widths[col] = self.col_widths[col].max(w);
    }

    fn write_text(&mut self, col: u16, s: &str, format: &Format) -> AppResult<()> {
        self.worksheet
            .write_string_with_format(self.row, col, s, format)
            .map_err(to_export_error)?;
        Ok(())
    }

    fn write_statement(&mut self, label: &str, value: &str, emphasized: bool) -> AppResult<()> {
        let label_format = Format::new().set_bold();
        let value_format = if emphasized {
            Format::new().set_bold().set_font_color(Color::RGB(0x1F4E79))
        } else {
            Format::new()
        };

        self.write_text(0, label, &label_format)?;
        self.write_text(1, value, &value_format)?;
        self.track_width(0, label);

        self.row += 1;
        Ok(())
    }

    fn write_table(&mut self, table: &TableSection) -> AppResult<()> {
        self.row += 1;
        self.write_text(0, &table.caption, &Format::new().set_bold())?;
        self.row += 1;

        let style = TableSection::HEADER_STYLE;
        let mut header_format = Format::new()
            .set_font_color(Color::RGB(style.foreground))
            .set_background_color(Color::RGB(style.background))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        if style.bold {
            header_format = header_format.set_bold();
        }

        for (col, header) in table.columns.iter().enumerate() {
            self.write_text(col as u16, header, &header_format)?;
            self.track_width(col, header);
        }
        self.row += 1;

        let band1 = Color::RGB(0xF2F2F2);
        let band2 = Color::RGB(0xFFFFFF);

        for (row_index, values) in table.rows.iter().enumerate() {
            let band_color = if row_index % 2 == 0 { band1 } else { band2 };

            for (col, value) in values.iter().enumerate() {
                let kind = table.kind(col);
                write_xlsx_cell(self.worksheet, self.row, col as u16, value, kind, band_color)?;
                self.track_width(col, value);
            }
            self.row += 1;
        }

        self.row += 1;
        Ok(())
    }

    fn apply_column_widths(&mut self) -> AppResult<()> {
        for (c, w) in self.col_widths.iter().enumerate() {
            self.worksheet
                .set_column_width(c as u16, *w as f64 + 2.0)
                .map_err(to_export_error)?;
        }
        Ok(())
    }
}

/// Write one table cell. Only `Count` and `Hours` columns become numbers;
/// a cell in them that does not parse falls back to text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: ColumnKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let number = match kind {
        ColumnKind::Text => None,
        ColumnKind::Count | ColumnKind::Hours => s.parse::<f64>().ok().filter(|n| n.is_finite()),
    };

    if let Some(num) = number {
        let fmt = match kind {
            ColumnKind::Hours => base.set_align(FormatAlign::Right).set_num_format("0.00"),
            _ => base.set_align(FormatAlign::Right),
        };

        worksheet
            .write_number_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_string_with_format(row, col, s, &base)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
