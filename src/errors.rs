use std::fmt;

use crate::client::ClientError;

#[derive(Debug, Clone)]
pub enum BookmarkerError {
    Config(String),
    Validation(String),
    Network(String),
    Server(String),
    Unauthorized(String),
    Serialization(String),
    Clipboard(String),
    FileOperation(String),
    Terminal(String),
}

impl BookmarkerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            BookmarkerError::Config(_) => "E001",
            BookmarkerError::Validation(_) => "E002",
            BookmarkerError::Network(_) => "E003",
            BookmarkerError::Server(_) => "E004",
            BookmarkerError::Unauthorized(_) => "E005",
            BookmarkerError::Serialization(_) => "E006",
            BookmarkerError::Clipboard(_) => "E007",
            BookmarkerError::FileOperation(_) => "E008",
            BookmarkerError::Terminal(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            BookmarkerError::Config(_) => "Configuration Error",
            BookmarkerError::Validation(_) => "Validation Error",
            BookmarkerError::Network(_) => "Network Error",
            BookmarkerError::Server(_) => "Server Error",
            BookmarkerError::Unauthorized(_) => "Unauthorized",
            BookmarkerError::Serialization(_) => "Serialization Error",
            BookmarkerError::Clipboard(_) => "Clipboard Error",
            BookmarkerError::FileOperation(_) => "File Operation Error",
            BookmarkerError::Terminal(_) => "Terminal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            BookmarkerError::Config(msg) => msg,
            BookmarkerError::Validation(msg) => msg,
            BookmarkerError::Network(msg) => msg,
            BookmarkerError::Server(msg) => msg,
            BookmarkerError::Unauthorized(msg) => msg,
            BookmarkerError::Serialization(msg) => msg,
            BookmarkerError::Clipboard(msg) => msg,
            BookmarkerError::FileOperation(msg) => msg,
            BookmarkerError::Terminal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
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

    /// 格式化为简洁输出（用于 TUI 状态栏和日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BookmarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BookmarkerError {}

// 便捷的构造函数
impl BookmarkerError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Validation(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Network(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Server(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Unauthorized(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Serialization(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Clipboard(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::FileOperation(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        BookmarkerError::Terminal(msg.into())
    }
}

impl From<ClientError> for BookmarkerError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(msg) => BookmarkerError::Validation(msg),
            ClientError::Transport(msg) | ClientError::TaskJoin(msg) => {
                BookmarkerError::Network(msg)
            }
            ClientError::Status { .. } => BookmarkerError::Server(err.to_string()),
            ClientError::Unauthorized => BookmarkerError::Unauthorized(err.to_string()),
            ClientError::Decode(msg) => BookmarkerError::Serialization(msg),
        }
    }
}

impl From<std::io::Error> for BookmarkerError {
    fn from(err: std::io::Error) -> Self {
        BookmarkerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BookmarkerError {
    fn from(err: serde_json::Error) -> Self {
        BookmarkerError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for BookmarkerError {
    fn from(err: toml::ser::Error) -> Self {
        BookmarkerError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookmarkerError>;
