use thiserror::Error;

/// Errors raised while loading or validating timeline data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("series is empty")]
    EmptySeries,

    #[error("record {index}: unparseable year `{value}`")]
    InvalidYear { index: usize, value: String },

    #[error("record {index}: count `{value}` is not a non-negative integer")]
    InvalidCount { index: usize, value: String },

    #[error("csv is missing the `{0}` column")]
    MissingColumn(&'static str),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),
}
