//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `process`: 批量校验并修正条目能量
//! - `explain`: 展示单个条目的修正明细
//! - `schemes`: 列出打包的修正方案
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: process, explain, schemes

pub mod explain;
pub mod process;
pub mod schemes;

use clap::{Parser, Subcommand};

/// encorr - DFT 能量兼容性校验与修正工具
#[derive(Parser)]
#[command(name = "encorr")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A DFT total-energy compatibility validation and correction toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Validate entries against a correction scheme and correct their energies
    Process(process::ProcessArgs),

    /// Show the per-rule correction breakdown for entries in one file
    Explain(explain::ExplainArgs),

    /// List the packaged correction schemes
    Schemes(schemes::SchemesArgs),
}
