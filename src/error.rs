//! Error types / 错误类型

use std::path::PathBuf;
use thiserror::Error;

/// Dataset could not be turned into a catalog / 数据集加载失败
///
/// Recoverable: callers log it and fall back to an empty store.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("dataset not found: {0}")]
    Missing(String),

    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {name} is not valid UTF-8")]
    Encoding {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate movie id {0} in dataset")]
    DuplicateId(i64),
}
