//! # schemes 子命令 CLI 定义
//!
//! 列出打包的修正方案
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/schemes.rs`

use clap::Args;

/// schemes 子命令参数
#[derive(Args, Debug)]
pub struct SchemesArgs {
    /// Also list the per-element correction values
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
