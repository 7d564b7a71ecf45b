//! # 统一错误处理模块
//!
//! 定义 Orcagen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Orcagen 统一错误类型
#[derive(Error, Debug)]
pub enum OrcagenError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} input: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl OrcagenError {
    /// 构造字段校验错误
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        OrcagenError::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 构造解析错误
    pub fn parse(
        format: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        OrcagenError::ParseError {
            format: format.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, OrcagenError>;
