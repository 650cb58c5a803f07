//! Error type shared by report loading and clipboard access.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("report data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("couldn't read report file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no report data was provided")]
    MissingReport,

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}
