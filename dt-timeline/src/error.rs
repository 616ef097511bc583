use dt_data::DataError;
use thiserror::Error;

/// Errors raised while building or driving a timeline view.
///
/// Out-of-range windows are never errors; they are clamped.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("no container element with id `{0}`")]
    MissingContainer(String),

    #[error("invalid timeline config: {0}")]
    Config(String),

    #[error("timeline config is not valid json: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("preset `{0}` is disabled")]
    DisabledPreset(String),
}
