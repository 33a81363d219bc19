//! # 条目身份校验器
//!
//! 判定一个条目声明的赝势身份与 Hubbard U 设置是否匹配参考方案。
//! 纯函数：只读条目与方案，无副作用。
//!
//! ## 拒绝与配置错误的区分
//! - 不匹配（错误赝势、错误 U 值、运行类型不符）是高频的正常结果，
//!   返回 `Rejected`，绝不上抛
//! - 要求哈希校验而条目没有任何可校验的哈希，说明来源信息缺失，
//!   返回 `Err`，必须由调用方修正
//!
//! ## 依赖关系
//! - 被 `compat/engine.rs` 调用
//! - 使用 `compat/scheme.rs` 的方案配置

use crate::compat::scheme::{RunTypePolicy, Scheme};
use crate::error::{EncorrError, Result};
use crate::models::Entry;

/// 校验结果（瞬态，不持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(String),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}

/// 校验条目与方案的兼容性
pub fn validate(entry: &Entry, scheme: &Scheme) -> Result<ValidationOutcome> {
    if let outcome @ ValidationOutcome::Rejected(_) = check_potcars(entry, scheme)? {
        return Ok(outcome);
    }
    Ok(check_hubbards(entry, scheme))
}

/// 赝势身份校验
///
/// 成分里的每个元素必须恰好有一条匹配的身份记录；哈希校验开启时
/// 比较哈希，关闭时比较标题符号。
fn check_potcars(entry: &Entry, scheme: &Scheme) -> Result<ValidationOutcome> {
    let formula = entry.composition.formula();

    let identities = match entry.parameters.potcar.as_deref() {
        Some(list) if !list.is_empty() => list,
        _ => {
            if scheme.check_potcar_hash {
                return Err(EncorrError::MissingPotcarData(formula));
            }
            // 哈希校验关闭时也无从比较标题，按不匹配处理
            return Ok(ValidationOutcome::Rejected(format!(
                "{}: no pseudopotential identity records",
                formula
            )));
        }
    };

    for element in entry.composition.elements() {
        let reference = match scheme.potcars.get(element) {
            Some(r) => r,
            None => {
                return Ok(ValidationOutcome::Rejected(format!(
                    "{}: scheme defines no reference pseudopotential for {}",
                    formula, element
                )));
            }
        };

        let matching: Vec<_> = identities.iter().filter(|p| p.element() == element).collect();
        if matching.len() != 1 {
            return Ok(ValidationOutcome::Rejected(format!(
                "{}: expected exactly one pseudopotential for {}, found {}",
                formula,
                element,
                matching.len()
            )));
        }

        let identity = matching[0];
        if scheme.check_potcar_hash {
            let hash = identity
                .hash
                .as_deref()
                .ok_or_else(|| EncorrError::MissingPotcarData(formula.clone()))?;
            if !reference.hashes.iter().any(|h| h == hash) {
                return Ok(ValidationOutcome::Rejected(format!(
                    "{}: pseudopotential hash mismatch for {}",
                    formula, element
                )));
            }
        } else if !reference.symbols.iter().any(|s| s == identity.symbol()) {
            return Ok(ValidationOutcome::Rejected(format!(
                "{}: pseudopotential symbol {} not allowed for {}",
                formula,
                identity.symbol(),
                element
            )));
        }
    }

    Ok(ValidationOutcome::Accepted)
}

/// 运行类型与 Hubbard U 一致性校验
fn check_hubbards(entry: &Entry, scheme: &Scheme) -> ValidationOutcome {
    let formula = entry.composition.formula();
    let params = &entry.parameters;

    let run_type = match params.run_type.as_deref() {
        Some(rt) => rt,
        None => {
            return ValidationOutcome::Rejected(format!("{}: missing run type", formula));
        }
    };

    match scheme.run_type_policy {
        RunTypePolicy::GgaOnly => {
            if run_type != "GGA" {
                return ValidationOutcome::Rejected(format!(
                    "{}: run type {} not accepted by a GGA-only scheme",
                    formula, run_type
                ));
            }
            if params.is_hubbard || params.hubbards.values().any(|u| *u != 0.0) {
                return ValidationOutcome::Rejected(format!(
                    "{}: unexpected Hubbard parameters in a GGA-only scheme",
                    formula
                ));
            }
        }
        RunTypePolicy::GgaMixed => {
            if run_type != "GGA" && run_type != "GGA+U" {
                return ValidationOutcome::Rejected(format!(
                    "{}: unknown run type {}",
                    formula, run_type
                ));
            }
            if (run_type == "GGA+U") != params.is_hubbard {
                return ValidationOutcome::Rejected(format!(
                    "{}: run type {} inconsistent with is_hubbard={}",
                    formula, run_type, params.is_hubbard
                ));
            }

            let needs_u = entry
                .composition
                .elements()
                .any(|el| scheme.required_u(&entry.composition, el) != 0.0);

            if needs_u {
                if !params.is_hubbard {
                    return ValidationOutcome::Rejected(format!(
                        "{}: composition requires a Hubbard-corrected run",
                        formula
                    ));
                }
                // U 值是离散表值，按位比较
                for el in entry.composition.elements() {
                    let required = scheme.required_u(&entry.composition, el);
                    let actual = params.hubbards.get(el).copied().unwrap_or(0.0);
                    if actual != required {
                        return ValidationOutcome::Rejected(format!(
                            "{}: U value for {} is {}, scheme requires {}",
                            formula, el, actual, required
                        ));
                    }
                }
            } else if params.is_hubbard || params.hubbards.values().any(|u| *u != 0.0) {
                return ValidationOutcome::Rejected(format!(
                    "{}: Hubbard parameters on a composition that requires none",
                    formula
                ));
            }
        }
    }

    ValidationOutcome::Accepted
}
