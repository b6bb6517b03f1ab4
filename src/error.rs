//! Error types for the fallible edges of the game
//!
//! The simulation itself never fails; only configuration loading and
//! browser bootstrap can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to parse tuning JSON: {0}")]
    TuningParse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing DOM element `{0}`")]
    MissingElement(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
