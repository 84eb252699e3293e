use std::fmt;

#[derive(Debug, Clone)]
pub enum BadgeError {
    StoreConnection(String),
    StoreOperation(String),
    StoreBackendNotFound(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
    Validation(String),
}

impl BadgeError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            BadgeError::StoreConnection(_) => "E001",
            BadgeError::StoreOperation(_) => "E002",
            BadgeError::StoreBackendNotFound(_) => "E003",
            BadgeError::Config(_) => "E004",
            BadgeError::FileOperation(_) => "E005",
            BadgeError::Serialization(_) => "E006",
            BadgeError::Validation(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            BadgeError::StoreConnection(_) => "Store Connection Error",
            BadgeError::StoreOperation(_) => "Store Operation Error",
            BadgeError::StoreBackendNotFound(_) => "Store Backend Not Found",
            BadgeError::Config(_) => "Configuration Error",
            BadgeError::FileOperation(_) => "File Operation Error",
            BadgeError::Serialization(_) => "Serialization Error",
            BadgeError::Validation(_) => "Validation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            BadgeError::StoreConnection(msg)
            | BadgeError::StoreOperation(msg)
            | BadgeError::StoreBackendNotFound(msg)
            | BadgeError::Config(msg)
            | BadgeError::FileOperation(msg)
            | BadgeError::Serialization(msg)
            | BadgeError::Validation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于启动失败时打印到终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BadgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BadgeError {}

// 便捷的构造函数
impl BadgeError {
    pub fn store_connection<T: Into<String>>(msg: T) -> Self {
        BadgeError::StoreConnection(msg.into())
    }

    pub fn store_operation<T: Into<String>>(msg: T) -> Self {
        BadgeError::StoreOperation(msg.into())
    }

    pub fn store_backend_not_found<T: Into<String>>(msg: T) -> Self {
        BadgeError::StoreBackendNotFound(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        BadgeError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        BadgeError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BadgeError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BadgeError::Validation(msg.into())
    }
}

impl From<redis::RedisError> for BadgeError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_connection_refusal() || err.is_connection_dropped() || err.is_io_error() {
            BadgeError::StoreConnection(err.to_string())
        } else {
            BadgeError::StoreOperation(err.to_string())
        }
    }
}

impl From<std::io::Error> for BadgeError {
    fn from(err: std::io::Error) -> Self {
        BadgeError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BadgeError {
    fn from(err: serde_json::Error) -> Self {
        BadgeError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for BadgeError {
    fn from(err: toml::ser::Error) -> Self {
        BadgeError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for BadgeError {
    fn from(err: config::ConfigError) -> Self {
        BadgeError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BadgeError>;
