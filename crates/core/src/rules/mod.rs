//! Built-in line rules.
//!
//! The order rules are registered in is the classification precedence; see
//! [`crate::CalendarImporter::new`].

mod combined;
mod day_only;
mod full_date;
mod iso_date;
mod month_header;
mod simple_time;
mod time_range;
mod title;

pub use combined::{DateTimeDashTitleRule, DateTimeTitleRule, TitleDashDateTimeRule};
pub use day_only::DayOnlyRule;
pub use full_date::FullDateRule;
pub use iso_date::IsoDateRule;
pub use month_header::MonthHeaderRule;
pub use simple_time::SimpleTimeRule;
pub use time_range::TimeRangeRule;
pub use title::TitleRule;
