//! # 数据模型模块
//!
//! 定义计算条目、化学成分与晶体结构的数据模型。
//!
//! ## 依赖关系
//! - 被 `compat/` 和 `commands/` 使用
//! - 子模块: composition, elements, entry, structure

pub mod composition;
pub mod elements;
pub mod entry;
pub mod structure;

pub use composition::Composition;
pub use entry::{Adjustment, AnionMotif, CalcParams, Entry, PotcarIdentity};
pub use structure::{Atom, Crystal, Lattice};
