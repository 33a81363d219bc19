//! # encorr - DFT 能量兼容性校验与修正工具
//!
//! 把独立电子结构计算产出的总能量对齐到同一参照系：校验赝势身份与
//! Hubbard U 设置，按阴离子成键基序查修正表，输出确定性的能量修正、
//! 不确定度与可读的修正明细。
//!
//! ## 子命令
//! - `process` - 批量校验并修正条目能量
//! - `explain` - 展示单个条目的修正明细
//! - `schemes` - 列出打包的修正方案
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── compat/  (校验、分类、修正引擎)
//!   │     ├── models/  (数据模型)
//!   │     └── batch/   (并行批处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod compat;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
