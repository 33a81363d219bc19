//! # schemes 命令实现
//!
//! 列出打包的修正方案与其覆盖范围。
//!
//! ## 依赖关系
//! - 使用 `cli/schemes.rs` 定义的参数
//! - 使用 `compat/scheme.rs`
//! - 使用 `utils/output.rs`

use crate::cli::schemes::SchemesArgs;
use crate::compat::Scheme;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 方案总览行
#[derive(Debug, Clone, Tabled)]
struct SchemeRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Run types")]
    run_types: String,
    #[tabled(rename = "Motifs")]
    motifs: String,
    #[tabled(rename = "Elements")]
    elements: usize,
    #[tabled(rename = "U elements")]
    u_elements: usize,
}

/// 执行 schemes 命令
pub fn execute(args: SchemesArgs) -> Result<()> {
    output::print_header("Packaged Correction Schemes");

    let mut rows = Vec::new();
    let mut advisories = Vec::new();

    for id in Scheme::builtin_names() {
        let build = Scheme::builtin(id)?;
        let scheme = &build.scheme;

        let u_elements = scheme
            .advanced_corrections
            .values()
            .flat_map(|table| table.keys())
            .collect::<std::collections::BTreeSet<_>>()
            .len();

        rows.push(SchemeRow {
            name: scheme.name.clone(),
            id: id.to_string(),
            run_types: scheme.run_type_policy.to_string(),
            motifs: if scheme.motif_aware { "yes" } else { "no" }.to_string(),
            elements: scheme.potcars.len(),
            u_elements,
        });

        if let Some(advisory) = build.advisory {
            advisories.push((scheme.name.clone(), advisory));
        }

        if args.verbose {
            print_corrections(scheme);
        }
    }

    if !args.verbose {
        println!("{}", Table::new(rows));
    }

    for (name, advisory) in &advisories {
        output::print_advisory(name, advisory);
    }

    Ok(())
}

/// 打印方案的修正值明细
fn print_corrections(scheme: &Scheme) {
    output::print_info(&format!("{} composition corrections:", scheme.name));
    for (element, c) in &scheme.composition_corrections {
        println!("  {:<4} {:+.5} eV/atom  ± {:.4}", element, c.value, c.uncertainty);
    }
    for (motif, c) in &scheme.motif_corrections {
        println!("  {:<12} {:+.5} eV/atom  ± {:.4}", motif.to_string(), c.value, c.uncertainty);
    }
    for (anion, table) in &scheme.advanced_corrections {
        output::print_info(&format!(
            "{} advanced corrections ({}-keyed):",
            scheme.name, anion
        ));
        for (element, adv) in table {
            println!(
                "  {:<4} U = {:<5} {:+.5} eV/atom  ± {:.4}",
                element, adv.u, adv.value, adv.uncertainty
            );
        }
    }
    output::print_separator();
}
