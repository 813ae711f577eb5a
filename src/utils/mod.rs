pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{count, fixed2};
pub use time::{decimal_hours, format_time, round2};
