//! # 计算条目数据模型
//!
//! 一次电子结构计算的成分、原始能量、可选结构与计算元数据。
//! 条目是不可变输入；修正引擎克隆后在副本上附加修正结果。
//!
//! ## 依赖关系
//! - 被 `compat/` 与 `commands/` 使用
//! - 使用 `models/composition.rs`, `models/structure.rs`

use crate::models::{Composition, Crystal};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 阴离子结构基序
///
/// 含氧化合物按 O-O 成键环境细分；含硫化合物只有 sulfide 一类。
/// 未分类（不含 O/S）用 `Option::None` 表达，不进入枚举。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnionMotif {
    Oxide,
    Peroxide,
    Superoxide,
    Ozonide,
    Sulfide,
}

impl std::fmt::Display for AnionMotif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AnionMotif::Oxide => "oxide",
            AnionMotif::Peroxide => "peroxide",
            AnionMotif::Superoxide => "superoxide",
            AnionMotif::Ozonide => "ozonide",
            AnionMotif::Sulfide => "sulfide",
        };
        write!(f, "{}", label)
    }
}

/// 赝势身份记录
///
/// `titel` 是赝势文件的标题行（如 "PAW_PBE Fe_pv 06Sep2000"），
/// `hash` 是其内容校验和。哈希校验关闭时只比较标题中的符号。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotcarIdentity {
    pub titel: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl PotcarIdentity {
    /// 标题行中的赝势符号（第二个空白分隔字段）
    ///
    /// "PAW_PBE Fe_pv 06Sep2000" -> "Fe_pv"；单字段标题原样返回。
    pub fn symbol(&self) -> &str {
        self.titel.split_whitespace().nth(1).unwrap_or(&self.titel)
    }

    /// 符号对应的元素（下划线前的部分）："Fe_pv" -> "Fe"
    pub fn element(&self) -> &str {
        self.symbol().split('_').next().unwrap_or(self.symbol())
    }
}

/// 计算元数据
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcParams {
    /// 泛函/运行类型标签（"GGA" 或 "GGA+U"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_type: Option<String>,

    /// 是否施加了 Hubbard U
    #[serde(default)]
    pub is_hubbard: bool,

    /// 每元素的 U 值（eV）
    #[serde(default)]
    pub hubbards: BTreeMap<String, f64>,

    /// 赝势身份记录列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potcar: Option<Vec<PotcarIdentity>>,
}

/// 一条已应用的修正（名称、数值贡献、不确定度贡献）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    pub name: String,

    /// 修正贡献（eV）
    pub value: f64,

    /// 不确定度贡献（eV），已乘原子数
    #[serde(default)]
    pub uncertainty: f64,
}

/// 计算条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// 条目标识（数据库 id 或文件名）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// 化学成分（接受化学式字符串或元素计数映射）
    pub composition: Composition,

    /// 原始总能量（eV），引擎不修改
    pub energy: f64,

    /// 已累积的能量修正（eV）
    #[serde(default)]
    pub correction: f64,

    /// 修正的不确定度（eV）
    #[serde(default)]
    pub correction_uncertainty: f64,

    /// 修正来源明细，按应用顺序排列
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<Adjustment>,

    /// 可选晶体结构
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Crystal>,

    /// 缓存的阴离子基序标签
    ///
    /// 没有结构坐标的条目依赖它保留曾经判定过的基序。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oxide_type: Option<AnionMotif>,

    /// 计算元数据
    #[serde(default)]
    pub parameters: CalcParams,
}

impl Entry {
    pub fn new(composition: Composition, energy: f64) -> Self {
        Entry {
            id: None,
            composition,
            energy,
            correction: 0.0,
            correction_uncertainty: 0.0,
            adjustments: Vec::new(),
            structure: None,
            oxide_type: None,
            parameters: CalcParams::default(),
        }
    }

    /// 修正后的总能量
    pub fn corrected_energy(&self) -> f64 {
        self.energy + self.correction
    }
}
