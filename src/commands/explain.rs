//! # explain 命令实现
//!
//! 打印条目的逐条修正明细：规则名、数值贡献、不确定度贡献。
//!
//! ## 依赖关系
//! - 使用 `cli/explain.rs` 定义的参数
//! - 使用 `commands/process.rs` 的条目加载
//! - 使用 `compat/engine.rs`, `compat/explain.rs`
//! - 使用 `utils/output.rs`

use crate::cli::explain::ExplainArgs;
use crate::compat::{CorrectionEngine, Explanation, ValidationOutcome};
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 明细表格行
#[derive(Debug, Clone, Tabled)]
struct RuleRow {
    #[tabled(rename = "Correction")]
    name: String,
    #[tabled(rename = "Value (eV)")]
    value: String,
    #[tabled(rename = "σ (eV)")]
    uncertainty: String,
}

/// 执行 explain 命令
pub fn execute(args: ExplainArgs) -> Result<()> {
    output::print_header("Correction Breakdown");

    let scheme = super::load_scheme(&args.scheme, args.gga_only, args.check_hash, args.no_motifs)?;
    let scheme_name = scheme.name.clone();
    let engine = CorrectionEngine::new(scheme);

    let entries = super::process::load_entries(&args.input)?;

    for entry in &entries {
        match engine.validate(entry)? {
            ValidationOutcome::Rejected(reason) => {
                output::print_skip(&reason);
                continue;
            }
            ValidationOutcome::Accepted => {}
        }

        // 已通过校验，explain 必然返回明细
        let adjustments = engine.explain(entry)?.unwrap_or_default();
        let explanation = Explanation::build(&scheme_name, entry, adjustments);

        output::print_info(&explanation.summary());
        if !explanation.rows.is_empty() {
            let rows: Vec<RuleRow> = explanation
                .rows
                .iter()
                .map(|a| RuleRow {
                    name: a.name.clone(),
                    value: format!("{:+.5}", a.value),
                    uncertainty: format!("{:.5}", a.uncertainty),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        println!(
            "  corrected energy: {:.5} eV\n",
            explanation.corrected_energy()
        );
    }

    Ok(())
}
