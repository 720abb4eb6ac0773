//! 服务配置
//!
//! 优先级：环境变量 > 配置文件 > 默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::app::catalog::IdPolicy;

/// 配置文件搜索路径
const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 目录服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 目录存储配置
    pub catalog: CatalogConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 目录存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// id 分配策略 (size_based, monotonic)
    pub id_policy: IdPolicy,
    /// 启动时是否载入示例产品
    pub seed: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 4000,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::SizeBased,
            seed: true,
        }
    }
}

impl HttpConfig {
    /// `bind_address:port`
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        // 确保目录存在
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 用环境变量覆盖配置项
    ///
    /// `lookup` 通常是 `|key| std::env::var(key).ok()`。
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("CATALOG_PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的端口: {}", port)))?;
        }
        if let Some(bind_address) = lookup("CATALOG_BIND_ADDRESS") {
            self.http.bind_address = bind_address;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(policy) = lookup("CATALOG_ID_POLICY") {
            self.catalog.id_policy = policy.parse().map_err(ConfigError::Validation)?;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 验证HTTP配置
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时必须大于0".to_string()));
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 加载、覆盖并验证配置
///
/// `CATALOG_CONFIG` 指定配置文件时只读取该文件，否则依次尝试搜索路径，
/// 都不存在则使用默认配置。
pub fn load_config() -> Result<Config, ConfigError> {
    let mut config = match std::env::var("CATALOG_CONFIG") {
        Ok(path) => Config::load_from_file(path)?,
        Err(_) => match CONFIG_PATHS.iter().find(|path| Path::new(path).exists()) {
            Some(path) => Config::load_from_file(path)?,
            None => Config::default(),
        },
    };

    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}
