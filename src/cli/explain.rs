//! # explain 子命令 CLI 定义
//!
//! 展示条目的逐条修正明细
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/explain.rs`

use clap::Args;
use std::path::PathBuf;

/// explain 子命令参数
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Entry JSON file (a single entry or an array of entries)
    pub input: PathBuf,

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
}
