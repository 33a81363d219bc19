//! # 修正方案配置
//!
//! 一个"方案"是一套不可变的参考配置：运行类型策略、每元素的赝势身份、
//! 成分修正表、阴离子基序修正表、Hubbard 高级修正表（含所需 U 值）以及
//! 可选的水相锚点。方案从 JSON 加载一次，之后只读；引擎不持有任何
//! 全局状态，不同方案实例互不影响。
//!
//! ## 打包方案
//! - `mp2020`    修订版修正表（带不确定度）
//! - `mp-legacy` 旧版修正表（已被 mp2020 取代，加载时返回提示）
//! - `mit`       MIT 修正表（加载时返回提示）
//!
//! ## 依赖关系
//! - 被 `compat/validator.rs`, `compat/engine.rs` 使用
//! - 使用 `compat/aqueous.rs` 的锚点类型
//! - 使用 `serde_json` 解析配置

use crate::compat::aqueous::AqueousAnchors;
use crate::error::{EncorrError, Result};
use crate::models::{AnionMotif, Composition};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 打包的方案配置（编译期嵌入）
const MP2020_JSON: &str = include_str!("../../config/mp2020.json");
const MP_LEGACY_JSON: &str = include_str!("../../config/mp_legacy.json");
const MIT_JSON: &str = include_str!("../../config/mit.json");

/// 方案接受的运行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RunTypePolicy {
    /// 只接受普通 GGA 计算
    #[serde(rename = "GGA")]
    GgaOnly,

    /// 混合方案：需要 U 的化合物用 GGA+U，其余用 GGA
    #[serde(rename = "GGA/GGA+U")]
    GgaMixed,
}

impl std::fmt::Display for RunTypePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunTypePolicy::GgaOnly => write!(f, "GGA"),
            RunTypePolicy::GgaMixed => write!(f, "GGA/GGA+U"),
        }
    }
}

/// 一条修正值及其不确定度（每原子，eV）
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CorrectionValue {
    pub value: f64,

    #[serde(default)]
    pub uncertainty: f64,
}

/// Hubbard 高级修正：所需 U 值与每原子修正
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AdvancedCorrection {
    /// 方案要求的 U 值（eV），离散表值，按位比较
    pub u: f64,

    pub value: f64,

    #[serde(default)]
    pub uncertainty: f64,
}

/// 某元素允许的赝势身份
#[derive(Debug, Clone, Deserialize)]
pub struct PotcarReference {
    /// 允许的赝势符号（标题第二字段，如 "Fe_pv"）
    pub symbols: Vec<String>,

    /// 允许的内容哈希
    #[serde(default)]
    pub hashes: Vec<String>,
}

/// 修正方案
#[derive(Debug, Clone, Deserialize)]
pub struct Scheme {
    /// 方案名，出现在修正明细的条目名里
    pub name: String,

    pub run_type_policy: RunTypePolicy,

    /// 是否校验赝势哈希（关闭时比较标题符号）
    #[serde(default)]
    pub check_potcar_hash: bool,

    /// 是否区分过氧化物/超氧化物/臭氧化物基序
    #[serde(default = "default_true")]
    pub motif_aware: bool,

    /// 每元素的参考赝势身份
    pub potcars: BTreeMap<String, PotcarReference>,

    /// 元素成分修正（与 Hubbard 无关）
    #[serde(default)]
    pub composition_corrections: BTreeMap<String, CorrectionValue>,

    /// 阴离子基序修正，覆盖氧的元素修正
    #[serde(default)]
    pub motif_corrections: BTreeMap<AnionMotif, CorrectionValue>,

    /// Hubbard 高级修正表，按化合物中电负性最高的元素分组
    #[serde(default)]
    pub advanced_corrections: BTreeMap<String, BTreeMap<String, AdvancedCorrection>>,

    /// 水相修正锚点
    #[serde(default)]
    pub aqueous: Option<AqueousAnchors>,
}

fn default_true() -> bool {
    true
}

/// 方案构造结果
///
/// 过时的方案在构造期携带一条非致命提示，批处理管线可以聚合提示
/// 而不中断。
#[derive(Debug, Clone)]
pub struct SchemeBuild {
    pub scheme: Scheme,
    pub advisory: Option<String>,
}

impl Scheme {
    /// 从 JSON 字符串加载方案
    pub fn from_json_str(json: &str) -> Result<Scheme> {
        serde_json::from_str(json).map_err(|e| EncorrError::SchemeConfig(e.to_string()))
    }

    /// 从 JSON 文件加载方案
    pub fn from_file(path: &Path) -> Result<Scheme> {
        let content = fs::read_to_string(path).map_err(|e| EncorrError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Scheme::from_json_str(&content)
    }

    /// 修订版打包方案
    pub fn materials_project_2020() -> Result<SchemeBuild> {
        Ok(SchemeBuild {
            scheme: Scheme::from_json_str(MP2020_JSON)?,
            advisory: None,
        })
    }

    /// 旧版打包方案
    pub fn materials_project_legacy() -> Result<SchemeBuild> {
        Ok(SchemeBuild {
            scheme: Scheme::from_json_str(MP_LEGACY_JSON)?,
            advisory: Some(
                "the legacy MP correction table has been superseded by mp2020; \
                 use it only to reproduce historical results"
                    .to_string(),
            ),
        })
    }

    /// MIT 打包方案
    pub fn mit() -> Result<SchemeBuild> {
        Ok(SchemeBuild {
            scheme: Scheme::from_json_str(MIT_JSON)?,
            advisory: Some(
                "the MIT correction table predates the MP tables and carries no \
                 uncertainty estimates"
                    .to_string(),
            ),
        })
    }

    /// 按名称解析打包方案
    pub fn builtin(name: &str) -> Result<SchemeBuild> {
        match name {
            "mp2020" => Scheme::materials_project_2020(),
            "mp-legacy" => Scheme::materials_project_legacy(),
            "mit" => Scheme::mit(),
            other => Err(EncorrError::UnknownScheme(other.to_string())),
        }
    }

    /// 打包方案名列表
    pub fn builtin_names() -> &'static [&'static str] {
        &["mp2020", "mp-legacy", "mit"]
    }

    /// 覆盖赝势哈希校验开关
    pub fn with_potcar_hash_check(mut self, check: bool) -> Self {
        self.check_potcar_hash = check;
        self
    }

    /// 覆盖基序识别开关
    pub fn with_motif_aware(mut self, aware: bool) -> Self {
        self.motif_aware = aware;
        self
    }

    /// 覆盖运行类型策略
    pub fn with_run_type_policy(mut self, policy: RunTypePolicy) -> Self {
        self.run_type_policy = policy;
        self
    }

    /// 该成分适用的高级修正子表
    ///
    /// 按成分中电负性最高的元素选择；没有对应子表时返回空表，
    /// 表示该化合物不需要任何 U 值。
    pub fn advanced_for(&self, comp: &Composition) -> Option<&BTreeMap<String, AdvancedCorrection>> {
        let anion = comp.most_electronegative()?;
        self.advanced_corrections.get(anion)
    }

    /// 某元素在该成分下要求的 U 值（不要求时为 0）
    pub fn required_u(&self, comp: &Composition, element: &str) -> f64 {
        self.advanced_for(comp)
            .and_then(|table| table.get(element))
            .map(|adv| adv.u)
            .unwrap_or(0.0)
    }
}
