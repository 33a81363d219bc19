//! # 化学成分数据模型
//!
//! 定义元素到原子数的映射，支持从化学式字符串解析。
//!
//! ## 依赖关系
//! - 被 `models/entry.rs`, `compat/` 使用
//! - 使用 `models/elements.rs` 查询电负性
//! - 使用 `regex` 解析化学式

use crate::error::{EncorrError, Result};
use crate::models::elements;

use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// 化学式词法单元：元素符号 + 可选计量数（支持小数，如 Li0.5）
static FORMULA_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]?)(\d+\.?\d*|\.\d+)?").unwrap());

/// 化学成分
///
/// 元素符号到原子数的有序映射。原子数为非负实数，
/// 允许分数占据（固溶体、平均结构）。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    counts: BTreeMap<String, f64>,
}

impl Composition {
    /// 从 (元素, 原子数) 序列创建，忽略原子数为零的项
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (el, n) in counts {
            if n > 0.0 {
                *map.entry(el.into()).or_insert(0.0) += n;
            }
        }
        Composition { counts: map }
    }

    /// 元素的原子数，不含该元素时为 0
    pub fn get(&self, element: &str) -> f64 {
        self.counts.get(element).copied().unwrap_or(0.0)
    }

    /// 是否包含某元素
    pub fn contains(&self, element: &str) -> bool {
        self.counts.contains_key(element)
    }

    /// 所有元素符号（按字典序）
    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|s| s.as_str())
    }

    /// 总原子数
    pub fn num_atoms(&self) -> f64 {
        self.counts.values().sum()
    }

    /// 是否为单质（只含一种元素）
    ///
    /// 单质条目是修正表的参考端元，不参与能量修正。
    pub fn is_element(&self) -> bool {
        self.counts.len() == 1
    }

    /// 电负性最高的元素（Pauling 标度）
    ///
    /// U 值表和高级修正表按该元素分组。表中查不到电负性的元素按 0 处理。
    pub fn most_electronegative(&self) -> Option<&str> {
        self.counts
            .keys()
            .max_by(|a, b| {
                let xa = elements::electronegativity(a).unwrap_or(0.0);
                let xb = elements::electronegativity(b).unwrap_or(0.0);
                xa.partial_cmp(&xb).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|s| s.as_str())
    }

    /// 渲染化学式（按字典序，计量数为 1 时省略）
    pub fn formula(&self) -> String {
        self.counts
            .iter()
            .map(|(el, n)| {
                if (n - 1.0).abs() < 1e-8 {
                    el.clone()
                } else if (n - n.round()).abs() < 1e-8 {
                    format!("{}{}", el, n.round() as i64)
                } else {
                    format!("{}{}", el, n)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

impl FromStr for Composition {
    type Err = EncorrError;

    /// 解析 "Fe2O3"、"LiFePO4"、"Li0.5CoO2" 形式的化学式
    ///
    /// 不支持括号分组；无法完整匹配的输入立即报错。
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EncorrError::InvalidFormula(s.to_string()));
        }

        let mut counts: BTreeMap<String, f64> = BTreeMap::new();
        let mut consumed = 0;

        for cap in FORMULA_TOKEN.captures_iter(trimmed) {
            let whole = cap.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
            // 匹配必须连续覆盖整个输入，否则存在非法字符
            if whole.0 != consumed {
                return Err(EncorrError::InvalidFormula(s.to_string()));
            }
            consumed = whole.1;

            let element = &cap[1];
            let n = match cap.get(2) {
                Some(m) => m
                    .as_str()
                    .parse::<f64>()
                    .map_err(|_| EncorrError::InvalidFormula(s.to_string()))?,
                None => 1.0,
            };
            if n < 0.0 {
                return Err(EncorrError::InvalidFormula(s.to_string()));
            }
            if n > 0.0 {
                *counts.entry(element.to_string()).or_insert(0.0) += n;
            }
        }

        if consumed != trimmed.len() || counts.is_empty() {
            return Err(EncorrError::InvalidFormula(s.to_string()));
        }

        Ok(Composition { counts })
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}

impl Serialize for Composition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (el, n) in &self.counts {
            map.serialize_entry(el, n)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Composition {
    /// 接受化学式字符串（"Fe2O3"）或元素计数映射（{"Fe": 2, "O": 3}）
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Formula(String),
            Counts(BTreeMap<String, f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Formula(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Counts(counts) => Ok(Composition::from_counts(counts)),
        }
    }
}
