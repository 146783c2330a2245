//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::dataset::{DatasetSource, MOVIES_FILE, REVIEWS_FILE};

/// Environment variable overriding the config file location / 配置文件路径环境变量
pub const CONFIG_ENV: &str = "MOVIES_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// Dataset configuration / 数据集配置
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Dataset configuration / 数据集配置
///
/// Empty paths mean the datasets bundled into the binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Movie dataset path / 电影数据文件
    #[serde(default)]
    pub movies_file: String,
    /// Review dataset path / 影评数据文件
    #[serde(default)]
    pub reviews_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn movies_source(&self) -> DatasetSource {
        DatasetSource::resolve(&self.catalog.movies_file, MOVIES_FILE)
    }

    pub fn reviews_source(&self) -> DatasetSource {
        DatasetSource::resolve(&self.catalog.reviews_file, REVIEWS_FILE)
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<AppConfig, ConfigError> {
    if config_path.exists() {
        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;

        let config: AppConfig = serde_json::from_str(&content)?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(config_path, content).map_err(|source| ConfigError::Write {
        path: config_path.to_path_buf(),
        source,
    })
}
