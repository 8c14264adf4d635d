//! src/error.rs
//!
//! 程序中所有可恢复错误的统一类型。
//! 计算器本身从不返回错误，这里只覆盖配置、文件和序列化相关的失败。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("无效的语言: {0}")]
    InvalidLanguage(String),

    #[error("无效的输出格式: {0}")]
    InvalidOutput(String),

    #[error("无法识别的表单字段: {0}")]
    UnknownField(String),

    #[error("文本包 {name} 解析失败: {source}")]
    Messages {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
