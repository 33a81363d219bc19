//! # 批量修正执行器
//!
//! 并行地把修正引擎应用到一批条目上。每个条目的计算只读共享的
//! 不可变方案配置，互相之间零协调，天然可并行。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 拒绝/失败的收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `compat/engine.rs`, `compat/aqueous.rs`
//! - 使用 `utils/progress.rs` 创建进度条

use crate::compat::{AqueousCorrection, CorrectionEngine, ValidationOutcome};
use crate::models::Entry;
use crate::utils::progress;

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单个条目的处理结果
#[derive(Debug, Clone)]
pub enum EntryOutcome {
    /// 通过校验并完成修正
    Corrected(Box<Entry>),
    /// 与方案不兼容（正常结果，附原因）
    Rejected(String),
    /// 配置错误（条目标识, 错误信息）
    Failed(String, String),
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 修正数量
    pub corrected: usize,
    /// 拒绝数量
    pub rejected: usize,
    /// 失败数量
    pub failed: usize,
    /// 拒绝原因
    pub rejections: Vec<String>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchSummary {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Corrected(_) => self.corrected += 1,
            EntryOutcome::Rejected(reason) => {
                self.rejected += 1;
                self.rejections.push(reason.clone());
            }
            EntryOutcome::Failed(id, err) => {
                self.failed += 1;
                self.failures.push((id.clone(), err.clone()));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.corrected + self.rejected + self.failed
    }
}

/// 批量修正执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的执行器，jobs 为 0 时使用全部核心
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理条目列表
    ///
    /// 配置错误按条目记为失败而不中断整批；输出保持输入顺序。
    pub fn run(
        &self,
        entries: Vec<Entry>,
        engine: &CorrectionEngine,
        aqueous: Option<&AqueousCorrection>,
    ) -> (Vec<Entry>, BatchSummary) {
        let total = entries.len();
        let pb = progress::create_progress_bar(total as u64, "Correcting");

        let corrected_count = AtomicUsize::new(0);
        let rejected_count = AtomicUsize::new(0);

        let pool = match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
            Ok(pool) => pool,
            Err(_) => {
                // 线程池创建失败时串行处理
                return self.run_serial(entries, engine, aqueous, &pb);
            }
        };

        let outcomes: Vec<EntryOutcome> = pool.install(|| {
            entries
                .par_iter()
                .map(|entry| {
                    let outcome = process_one(entry, engine, aqueous);

                    match &outcome {
                        EntryOutcome::Corrected(_) => {
                            corrected_count.fetch_add(1, Ordering::Relaxed);
                        }
                        EntryOutcome::Rejected(_) => {
                            rejected_count.fetch_add(1, Ordering::Relaxed);
                        }
                        EntryOutcome::Failed(_, _) => {}
                    }

                    pb.inc(1);
                    outcome
                })
                .collect()
        });

        pb.finish_and_clear();
        summarize(outcomes)
    }

    /// 无线程池时的串行后备路径
    fn run_serial(
        &self,
        entries: Vec<Entry>,
        engine: &CorrectionEngine,
        aqueous: Option<&AqueousCorrection>,
        pb: &indicatif::ProgressBar,
    ) -> (Vec<Entry>, BatchSummary) {
        let outcomes: Vec<EntryOutcome> = entries
            .iter()
            .map(|entry| {
                let outcome = process_one(entry, engine, aqueous);
                pb.inc(1);
                outcome
            })
            .collect();
        pb.finish_and_clear();
        summarize(outcomes)
    }
}

/// 处理单个条目：校验 → 修正 → 可选水相平移
fn process_one(
    entry: &Entry,
    engine: &CorrectionEngine,
    aqueous: Option<&AqueousCorrection>,
) -> EntryOutcome {
    let label = entry
        .id
        .clone()
        .unwrap_or_else(|| entry.composition.formula());

    // 先单独跑校验拿到拒绝原因，process 本身把拒绝折叠成 None
    match engine.validate(entry) {
        Err(e) => return EntryOutcome::Failed(label, e.to_string()),
        Ok(ValidationOutcome::Rejected(reason)) => return EntryOutcome::Rejected(reason),
        Ok(ValidationOutcome::Accepted) => {}
    }

    match engine.process(entry) {
        Err(e) => EntryOutcome::Failed(label, e.to_string()),
        Ok(None) => EntryOutcome::Rejected(format!("{}: incompatible entry", label)),
        Ok(Some(corrected)) => {
            let finished = match aqueous {
                Some(aq) => aq.correct(&corrected),
                None => corrected,
            };
            EntryOutcome::Corrected(Box::new(finished))
        }
    }
}

/// 汇总结果，保持输入顺序抽出修正后的条目
fn summarize(outcomes: Vec<EntryOutcome>) -> (Vec<Entry>, BatchSummary) {
    let mut summary = BatchSummary::default();
    let mut corrected = Vec::new();

    for outcome in outcomes {
        summary.merge(&outcome);
        if let EntryOutcome::Corrected(entry) = outcome {
            corrected.push(*entry);
        }
    }

    (corrected, summary)
}
