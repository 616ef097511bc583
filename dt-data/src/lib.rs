//! Data handling for the drama timeline.
//!
//! This crate turns the JSON/CSV exports of the plays dataset into the
//! validated, year-sorted series the timeline view draws:
//! - `record`: raw `{year, count}` records and their validation
//! - `series`: the sorted, deduplicated count-by-year `Series`
//! - `category`: `{year, category, value}` points for overlay polylines
//! - `aggregate`: plays-per-year counts computed from the plays CSV

pub mod aggregate;
pub mod category;
pub mod error;
pub mod record;
pub mod series;

pub use category::{group_by_category, CategoryPoint};
pub use error::DataError;
pub use record::RawRecord;
pub use series::{Series, SeriesPoint};
