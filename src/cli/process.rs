//! # process 子命令 CLI 定义
//!
//! 批量校验并修正条目能量
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/process.rs`

use clap::Args;
use std::path::PathBuf;

/// process 子命令参数
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Entry JSON files or directories containing them
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Correction scheme: mp2020, mp-legacy, mit, or a path to a scheme JSON file
    #[arg(long, default_value = "mp2020")]
    pub scheme: String,

    /// Accept plain GGA runs only
    #[arg(long, default_value_t = false)]
    pub gga_only: bool,

    /// Verify pseudopotential hashes instead of title symbols
    #[arg(long, default_value_t = false)]
    pub check_hash: bool,

    /// Disable peroxide/superoxide/ozonide detection
    #[arg(long, default_value_t = false)]
    pub no_motifs: bool,

    /// Apply the aqueous-phase O/H shift after the base correction
    #[arg(long, default_value_t = false)]
    pub aqueous: bool,

    /// File pattern for directory inputs (comma-separated globs)
    #[arg(long, default_value = "*.json")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = all cores)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Write corrected entries to a CSV report
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
