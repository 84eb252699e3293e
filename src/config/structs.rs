use serde::{Deserialize, Serialize};
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use crate::errors::{BadgeError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，配合 `__` 分隔符使用，例如 `VB__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "VB";

/// 计数存储后端
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    /// 进程内 DashMap，重启即丢失
    #[default]
    Memory,
    /// Redis 单 key 字符串
    Redis,
}

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - server: 监听地址、端口、worker 数量、关闭等待时间
/// - store: 计数存储后端
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：VB，分隔符：__
    ///
    /// Failures are reported on stderr and fall back to defaults, since
    /// logging is not initialized yet at this point.
    pub fn load(path: &str) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// Strict variant of [`StaticConfig::load`] that surfaces errors.
    pub fn try_load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // 未知后端报 StoreBackendNotFound
        if let Ok(name) = settings.get_string("store.backend") {
            StoreBackend::from_str(&name).map_err(|_| {
                BadgeError::store_backend_not_found(format!(
                    "Unknown store backend '{}', expected '{}' or '{}'",
                    name,
                    StoreBackend::Memory,
                    StoreBackend::Redis
                ))
            })?;
        }

        let config = settings.try_deserialize::<StaticConfig>()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(BadgeError::validation("server.port must not be 0"));
        }
        if self.server.workers == 0 {
            return Err(BadgeError::validation("server.workers must be at least 1"));
        }
        if self.store.backend == StoreBackend::Redis && self.store.redis.url.trim().is_empty() {
            return Err(BadgeError::validation(
                "store.redis.url is required when store.backend = \"redis\"",
            ));
        }
        Ok(())
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// 关闭时等待后台写入完成的最长时间（秒）
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default)]
    pub redis: RedisConfig,
}

/// Redis 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_url")]
    pub url: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get().clamp(1, 32)
}

fn default_shutdown_timeout_secs() -> u64 {
    10
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: default_workers(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
