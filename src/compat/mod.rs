//! # 兼容性校验与能量修正模块
//!
//! 判定条目是否匹配参考方案，并对通过的条目施加确定性的、
//! 可解释的能量修正。
//!
//! ## 子模块
//! - `scheme`: 方案配置（修正表、赝势身份、U 值表）
//! - `validator`: 赝势/Hubbard 身份校验
//! - `anion`: 阴离子基序分类
//! - `engine`: 修正编排与不确定度传播
//! - `aqueous`: 水相锚定的第二修正阶段
//! - `explain`: 修正明细渲染
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 数据模型

pub mod anion;
pub mod aqueous;
pub mod engine;
pub mod explain;
pub mod scheme;
pub mod validator;

pub use aqueous::{AqueousAnchors, AqueousCorrection};
pub use engine::CorrectionEngine;
pub use explain::Explanation;
pub use scheme::{RunTypePolicy, Scheme, SchemeBuild};
pub use validator::ValidationOutcome;
