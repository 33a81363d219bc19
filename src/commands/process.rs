//! # process 命令实现
//!
//! 批量加载条目 JSON，按方案校验并修正能量，输出表格与 CSV 报告。
//!
//! ## 功能
//! - 收集文件/目录输入
//! - 并行修正与进度反馈
//! - 拒绝与失败的汇总
//! - 可选水相修正与 CSV 导出
//!
//! ## 依赖关系
//! - 使用 `cli/process.rs` 定义的参数
//! - 使用 `compat/`, `batch/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, BatchSummary, EntryCollector};
use crate::cli::process::ProcessArgs;
use crate::compat::{AqueousCorrection, CorrectionEngine};
use crate::error::{EncorrError, Result};
use crate::models::Entry;
use crate::utils::output;

use serde::Serialize;
use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Atoms")]
    atoms: String,
    #[tabled(rename = "E raw (eV)")]
    raw: String,
    #[tabled(rename = "Correction (eV)")]
    correction: String,
    #[tabled(rename = "σ (eV)")]
    uncertainty: String,
    #[tabled(rename = "E corrected (eV)")]
    corrected: String,
}

/// CSV 报告行
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    entry: &'a str,
    formula: String,
    energy: f64,
    correction: f64,
    correction_uncertainty: f64,
    corrected_energy: f64,
}

/// 执行 process 命令
pub fn execute(args: ProcessArgs) -> Result<()> {
    output::print_header("Correcting DFT Energies");

    let scheme = super::load_scheme(&args.scheme, args.gga_only, args.check_hash, args.no_motifs)?;
    output::print_info(&format!(
        "Scheme {} ({}, hash check {})",
        scheme.name,
        scheme.run_type_policy,
        if scheme.check_potcar_hash { "on" } else { "off" }
    ));

    // 水相锚点在引擎拿走方案之前取出
    let aqueous = if args.aqueous {
        let anchors = scheme.aqueous.ok_or_else(|| {
            EncorrError::InvalidArgument(format!(
                "scheme {} carries no aqueous anchors",
                scheme.name
            ))
        })?;
        Some(AqueousCorrection::new(anchors))
    } else {
        None
    };

    // 收集并解析条目
    let files = EntryCollector::with_pattern(args.inputs.clone(), &args.pattern)?
        .recursive(args.recursive)
        .collect()?;
    output::print_info(&format!("Loading entries from {} file(s)...", files.len()));

    let mut entries = Vec::new();
    for file in &files {
        entries.extend(load_entries(file)?);
    }
    output::print_info(&format!("{} entries loaded", entries.len()));

    // 并行修正
    let engine = CorrectionEngine::new(scheme);
    let runner = BatchRunner::new(args.jobs);
    let (corrected, summary) = runner.run(entries, &engine, aqueous.as_ref());

    report(&corrected, &summary);

    if let Some(csv_path) = &args.csv {
        save_results_csv(&corrected, csv_path)?;
        output::print_success(&format!("CSV report written to '{}'", csv_path.display()));
    }

    output::print_done(&format!(
        "{} corrected, {} rejected, {} failed (of {})",
        summary.corrected,
        summary.rejected,
        summary.failed,
        summary.total()
    ));

    Ok(())
}

/// 从单个 JSON 文件加载条目（单条或数组）
pub(super) fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path).map_err(|e| EncorrError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut entries: Vec<Entry> = match serde_json::from_str::<Vec<Entry>>(&content) {
        Ok(list) => list,
        Err(_) => {
            let single: Entry =
                serde_json::from_str(&content).map_err(|e| EncorrError::EntryParseError {
                    path: path.display().to_string(),
                    source: e,
                })?;
            vec![single]
        }
    };

    // 没有自带标识的条目用文件名补齐，方便报告定位
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("entry")
        .to_string();
    let single = entries.len() == 1;
    for (i, entry) in entries.iter_mut().enumerate() {
        if entry.id.is_none() {
            entry.id = Some(if single {
                stem.clone()
            } else {
                format!("{}#{}", stem, i)
            });
        }
    }

    Ok(entries)
}

/// 打印修正结果表与拒绝/失败明细
fn report(corrected: &[Entry], summary: &BatchSummary) {
    if !corrected.is_empty() {
        let rows: Vec<ResultRow> = corrected
            .iter()
            .map(|e| ResultRow {
                entry: e.id.clone().unwrap_or_default(),
                formula: e.composition.formula(),
                atoms: format!("{}", e.composition.num_atoms()),
                raw: format!("{:.5}", e.energy),
                correction: format!("{:+.5}", e.correction),
                uncertainty: format!("{:.5}", e.correction_uncertainty),
                corrected: format!("{:.5}", e.corrected_energy()),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    for reason in &summary.rejections {
        output::print_skip(reason);
    }
    for (id, err) in &summary.failures {
        output::print_warning(&format!("{}: {}", id, err));
    }
}

/// 导出 CSV 报告
fn save_results_csv(entries: &[Entry], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(EncorrError::CsvError)?;

    for entry in entries {
        wtr.serialize(CsvRow {
            entry: entry.id.as_deref().unwrap_or(""),
            formula: entry.composition.formula(),
            energy: entry.energy,
            correction: entry.correction,
            correction_uncertainty: entry.correction_uncertainty,
            corrected_energy: entry.corrected_energy(),
        })?;
    }

    wtr.flush().map_err(|e| EncorrError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
