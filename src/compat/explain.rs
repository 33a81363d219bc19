//! # 修正明细渲染
//!
//! 把引擎产出的修正列表整理成可读的诊断输出。纯格式化，
//! 不修改任何输入。
//!
//! ## 依赖关系
//! - 被 `commands/explain.rs` 使用
//! - 使用 `models/entry.rs` 的 Adjustment

use crate::models::{Adjustment, Entry};

/// 一个条目的完整修正说明
#[derive(Debug, Clone)]
pub struct Explanation {
    /// 方案名
    pub scheme: String,

    /// 条目化学式
    pub formula: String,

    /// 有序修正列表（名称、数值、不确定度）
    pub rows: Vec<Adjustment>,

    /// 修正总和（eV）
    pub total: f64,

    /// 合成不确定度（eV）
    pub uncertainty: f64,

    /// 修正前能量（eV）
    pub raw_energy: f64,
}

impl Explanation {
    /// 由条目与其修正列表组装说明
    pub fn build(scheme: &str, entry: &Entry, rows: Vec<Adjustment>) -> Self {
        let total = rows.iter().map(|a| a.value).sum();
        let uncertainty = rows
            .iter()
            .map(|a| a.uncertainty * a.uncertainty)
            .sum::<f64>()
            .sqrt();
        Explanation {
            scheme: scheme.to_string(),
            formula: entry.composition.formula(),
            rows,
            total,
            uncertainty,
            raw_energy: entry.energy,
        }
    }

    /// 修正后能量
    pub fn corrected_energy(&self) -> f64 {
        self.raw_energy + self.total
    }

    /// 单行摘要
    pub fn summary(&self) -> String {
        format!(
            "{}: {} correction {:+.5} ± {:.5} eV ({} rules)",
            self.formula,
            self.scheme,
            self.total,
            self.uncertainty,
            self.rows.len()
        )
    }

    /// 多行文本渲染，每条规则一行
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.summary()];
        for row in &self.rows {
            lines.push(format!(
                "  {:<40} {:+12.5} eV  ± {:.5} eV",
                row.name, row.value, row.uncertainty
            ));
        }
        lines.push(format!(
            "  {:<40} {:+12.5} eV",
            "corrected energy",
            self.corrected_energy()
        ));
        lines.join("\n")
    }
}
