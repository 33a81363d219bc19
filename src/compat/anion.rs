//! # 阴离子环境分类器
//!
//! 判定含氧/含硫化合物的局域成键基序。含氧结构按 O-O 近邻键长
//! 分带识别过氧化物、超氧化物与臭氧化物；含硫（不含氧）成分一律
//! 归为硫化物，不再细分。分类永不失败：缺结构时退化到缓存标签
//! 或默认氧化物。
//!
//! ## 键长判据（Å，×1.1 容差系数）
//! - 成键:   d < 1.1 × 1.49（过氧 O-O 特征键长）
//! - 短键:   d < 1.1 × 1.35（超氧/臭氧 O-O 特征键长）
//! - 共享原子的短键（O₃ 链）→ 臭氧化物
//!
//! 混合基序按氧化程度最高者归类：臭氧 > 超氧 > 过氧 > 氧化物。
//!
//! ## 依赖关系
//! - 被 `compat/engine.rs` 调用
//! - 使用 `models/structure.rs` 的最小镜像距离

use crate::models::{AnionMotif, Composition, Crystal};

/// 键长容差系数
const RELATIVE_CUTOFF: f64 = 1.1;

/// 过氧 O-O 特征键长（Å）
const PEROXIDE_BOND: f64 = 1.49;

/// 超氧/臭氧 O-O 特征键长（Å）
const SUPEROXIDE_BOND: f64 = 1.35;

/// 分类条目的阴离子环境
///
/// 氧优先于硫：同时含 O 和 S 的成分（如硫酸盐）按氧环境分类。
/// 不含 O/S 的成分返回 `None`。
pub fn classify(
    composition: &Composition,
    structure: Option<&Crystal>,
    cached: Option<AnionMotif>,
) -> Option<AnionMotif> {
    if composition.contains("O") {
        if let Some(crystal) = structure {
            return Some(classify_oxygen(crystal));
        }
        // 无坐标的条目沿用曾经判定并缓存的基序
        if let Some(motif) = cached {
            return Some(motif);
        }
        return Some(AnionMotif::Oxide);
    }

    if composition.contains("S") {
        return Some(AnionMotif::Sulfide);
    }

    None
}

/// 基于 O-O 键长分带的氧环境分类
fn classify_oxygen(crystal: &Crystal) -> AnionMotif {
    let o_sites = crystal.sites_of("O");
    if o_sites.len() < 2 {
        return AnionMotif::Oxide;
    }

    let bonded_cutoff = RELATIVE_CUTOFF * PEROXIDE_BOND;
    let short_cutoff = RELATIVE_CUTOFF * SUPEROXIDE_BOND;

    let mut bonded = 0usize;
    let mut short_bonds: Vec<(usize, usize)> = Vec::new();

    for i in 0..o_sites.len() {
        for j in (i + 1)..o_sites.len() {
            let d = crystal.lattice.min_image_distance(&o_sites[i], &o_sites[j]);
            if d < bonded_cutoff {
                bonded += 1;
                if d < short_cutoff {
                    short_bonds.push((i, j));
                }
            }
        }
    }

    if !short_bonds.is_empty() {
        // 短键共享氧原子说明存在 O₃ 链
        for (k, &(a, b)) in short_bonds.iter().enumerate() {
            for &(c, d) in &short_bonds[k + 1..] {
                if a == c || a == d || b == c || b == d {
                    return AnionMotif::Ozonide;
                }
            }
        }
        return AnionMotif::Superoxide;
    }

    if bonded > 0 {
        return AnionMotif::Peroxide;
    }

    AnionMotif::Oxide
}
