pub mod record;
pub mod report;
pub mod schema;

pub use record::AttendanceRecord;
pub use report::{ColumnKind, Report, ReportSection, TableSection};
pub use schema::RecordSet;
