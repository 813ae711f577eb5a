//! Report document model: an ordered list of statements and tables,
//! built once per generation and handed to a serializer.

use serde::Serialize;

/// Emphasis every serializer must apply to table header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderStyle {
    pub bold: bool,
    /// 0xRRGGBB
    pub foreground: u32,
    /// 0xRRGGBB
    pub background: u32,
}

/// How the cells of one column are typed in spreadsheet outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Names, departments, clock times: always text.
    #[default]
    Text,
    /// Counts printed as stored (`12`, `3.5`).
    Count,
    /// Decimal hours, two fixed decimals.
    Hours,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSection {
    /// Bold heading printed above the table.
    pub caption: String,
    pub columns: Vec<String>,
    /// One entry per column.
    pub kinds: Vec<ColumnKind>,
    pub rows: Vec<Vec<String>>,
}

impl TableSection {
    /// Light-on-dark, bold.
    pub const HEADER_STYLE: HeaderStyle = HeaderStyle {
        bold: true,
        foreground: 0xFFFFFF,
        background: 0x000000,
    };

    /// A table whose columns are all text.
    pub fn new(caption: impl Into<String>, columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            caption: caption.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            kinds: vec![ColumnKind::Text; columns.len()],
            rows,
        }
    }

    /// Set the column kinds; columns past the end of `kinds` stay text.
    pub fn with_kinds(mut self, kinds: &[ColumnKind]) -> Self {
        for (slot, kind) in self.kinds.iter_mut().zip(kinds) {
            *slot = *kind;
        }
        self
    }

    pub fn kind(&self, column: usize) -> ColumnKind {
        self.kinds.get(column).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportSection {
    /// A bold label followed by its computed value.
    Statement {
        label: String,
        value: String,
        emphasized: bool,
    },
    Table(TableSection),
}

impl ReportSection {
    pub fn statement(label: impl Into<String>, value: impl Into<String>) -> Self {
        ReportSection::Statement {
            label: label.into(),
            value: value.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(label: impl Into<String>, value: impl Into<String>) -> Self {
        ReportSection::Statement {
            label: label.into(),
            value: value.into(),
            emphasized: true,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ReportSection::Statement { label, .. } => label,
            ReportSection::Table(t) => &t.caption,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub period_label: String,
    pub month_name: String,
    pub year: i32,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// `Attendance_Report_<MonthName>_<Year>`
    pub fn file_stem(&self) -> String {
        format!("Attendance_Report_{}_{}", self.month_name, self.year)
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem(), extension)
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableSection> {
        self.sections.iter().filter_map(|s| match s {
            ReportSection::Table(t) => Some(t),
            ReportSection::Statement { .. } => None,
        })
    }

    /// Value of the statement with the given label.
    pub fn statement_value(&self, label: &str) -> Option<&str> {
        self.sections.iter().find_map(|s| match s {
            ReportSection::Statement { label: l, value, .. } if l == label => Some(value.as_str()),
            _ => None,
        })
    }
}
