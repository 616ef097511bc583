//! Raw `{year, count}` records as they arrive from the JSON export.

use crate::error::DataError;
use chrono::NaiveDateTime;
use dt_utils::years::{parse_year, year_start};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record before validation. Both fields are kept as loose JSON so a bad
/// value can be reported verbatim instead of failing deep inside serde.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub year: Value,
    pub count: Value,
}

/// Aggregated output record, serialized in the same shape `RawRecord` reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: String,
    pub count: u64,
}

/// Parse a JSON year value: a string such as "1850" or "1850-03-01", or an
/// integral number.
pub fn year_from_value(index: usize, value: &Value) -> Result<NaiveDateTime, DataError> {
    let invalid = || DataError::InvalidYear {
        index,
        value: value.to_string(),
    };
    match value {
        Value::String(s) => parse_year(s).map_err(|_| invalid()),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|y| i32::try_from(y).ok())
            .and_then(year_start)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Parse a JSON count: a non-negative integer, or a float with no fraction
/// (the CSV-to-JSON conversion writes counts like `3.0`).
pub fn count_from_value(index: usize, value: &Value) -> Result<u64, DataError> {
    let count = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        _ => None,
    };
    count.ok_or_else(|| DataError::InvalidCount {
        index,
        value: value.to_string(),
    })
}
