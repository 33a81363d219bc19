//! # 统一错误处理模块
//!
//! 定义 encorr 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 普通拒绝（条目不满足参考方案）不是错误，由引擎返回 `None` 表达
//! - 配置错误（如要求哈希校验但条目缺少赝势记录）是必须上抛的 `Err`
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// encorr 统一错误类型
#[derive(Error, Debug)]
pub enum EncorrError {
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

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid chemical formula: {0}")]
    InvalidFormula(String),

    #[error("Failed to parse entry file: {path}\nReason: {source}")]
    EntryParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 配置错误（区别于普通拒绝）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid correction scheme configuration: {0}")]
    SchemeConfig(String),

    #[error("Unknown correction scheme: {0}")]
    UnknownScheme(String),

    #[error(
        "Pseudopotential hash verification requested but the entry carries no \
         identity records: {0}"
    )]
    MissingPotcarData(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EncorrError>;
