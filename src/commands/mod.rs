//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `compat/`, `models/`, `batch/`, `utils/`
//! - 子模块: process, explain, schemes

pub mod explain;
pub mod process;
pub mod schemes;

use crate::cli::Commands;
use crate::compat::Scheme;
use crate::error::Result;
use crate::utils::output;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Process(args) => process::execute(args),
        Commands::Explain(args) => explain::execute(args),
        Commands::Schemes(args) => schemes::execute(args),
    }
}

/// 解析方案参数：打包方案名或 JSON 文件路径
///
/// 过时方案的构造期提示在这里打印一次，之后不再出现。
fn load_scheme(name: &str, gga_only: bool, check_hash: bool, no_motifs: bool) -> Result<Scheme> {
    let build = if Scheme::builtin_names().contains(&name) {
        Scheme::builtin(name)?
    } else {
        let path = Path::new(name);
        crate::compat::SchemeBuild {
            scheme: Scheme::from_file(path)?,
            advisory: None,
        }
    };

    if let Some(advisory) = &build.advisory {
        output::print_advisory(&build.scheme.name, advisory);
    }

    let mut scheme = build.scheme;
    if gga_only {
        scheme = scheme.with_run_type_policy(crate::compat::RunTypePolicy::GgaOnly);
    }
    if check_hash {
        scheme = scheme.with_potcar_hash_check(true);
    }
    if no_motifs {
        scheme = scheme.with_motif_aware(false);
    }
    Ok(scheme)
}
