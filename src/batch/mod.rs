//! # 批量处理模块
//!
//! 提供条目文件的收集与并行修正能力。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配文件列表
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::EntryCollector;
pub use runner::{BatchRunner, BatchSummary, EntryOutcome};
