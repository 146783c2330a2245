//! Dataset sources / 数据集来源
//!
//! Default datasets are embedded at compile time from `resources/data`.
//! A path in `config.json` replaces the bundled copy.

use rust_embed::RustEmbed;
use std::fmt;
use std::path::PathBuf;

use crate::error::DataLoadError;

/// Bundled movie dataset name / 内置电影数据
pub const MOVIES_FILE: &str = "movies.json";
/// Bundled review dataset name / 内置影评数据
pub const REVIEWS_FILE: &str = "reviews.json";

#[derive(RustEmbed)]
#[folder = "resources/data/"]
#[include = "*.json"]
struct BundledData;

/// Where a dataset is read from / 数据集位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled(&'static str),
    File(PathBuf),
}

impl DatasetSource {
    /// Pick the configured file, or the bundled dataset when the setting is empty / 选择数据源
    pub fn resolve(configured: &str, bundled: &'static str) -> Self {
        let configured = configured.trim();
        if configured.is_empty() {
            DatasetSource::Bundled(bundled)
        } else {
            DatasetSource::File(PathBuf::from(configured))
        }
    }

    /// Read the whole dataset as text / 读取数据集内容
    pub fn read(&self) -> Result<String, DataLoadError> {
        match self {
            DatasetSource::Bundled(name) => {
                let file = BundledData::get(name)
                    .ok_or_else(|| DataLoadError::Missing(name.to_string()))?;
                String::from_utf8(file.data.into_owned()).map_err(|source| DataLoadError::Encoding {
                    name: name.to_string(),
                    source,
                })
            }
            DatasetSource::File(path) => {
                if !path.exists() {
                    return Err(DataLoadError::Missing(path.to_string_lossy().to_string()));
                }
                std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Bundled(name) => write!(f, "bundled:{}", name),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(DatasetSource::resolve("", MOVIES_FILE), DatasetSource::Bundled(MOVIES_FILE));
        assert_eq!(DatasetSource::resolve("   ", MOVIES_FILE), DatasetSource::Bundled(MOVIES_FILE));
        assert_eq!(
            DatasetSource::resolve("/srv/movies.json", MOVIES_FILE),
            DatasetSource::File(PathBuf::from("/srv/movies.json"))
        );
    }

    #[test]
    fn test_read_bundled() {
        let content = DatasetSource::Bundled(MOVIES_FILE).read().unwrap();
        assert!(content.trim_start().starts_with('['));
        assert!(DatasetSource::Bundled(REVIEWS_FILE).read().is_ok());
    }

    #[test]
    fn test_missing_sources() {
        assert!(matches!(
            DatasetSource::Bundled("nope.json").read(),
            Err(DataLoadError::Missing(_))
        ));
        assert!(matches!(
            DatasetSource::File(PathBuf::from("/definitely/not/here.json")).read(),
            Err(DataLoadError::Missing(_))
        ));
    }
}
