//! # 水相修正阶段
//!
//! 基础修正之后的可选第二阶段：把 O₂ 和 H₂O 的自由能锚定到外部
//! 参考值（来自实验生成焓数据，不重新计算），由两条锚点方程解出
//! O、H 的每原子平移量，再按 `shift_O·nO + shift_H·nH` 施加到任何
//! 含氧/含氢条目上。与基序修正正交，简单相加。
//!
//! ## 锚点方程
//! ```text
//! 2·sO       = E_ref(O₂)  − E_calc(O₂)
//! sO + 2·sH  = E_ref(H₂O) − E_calc(H₂O)
//! ```
//!
//! ## 依赖关系
//! - 被 `compat/engine.rs` 之后的调用方使用（阶段间无耦合）
//! - 锚点数值随方案配置一起加载（`compat/scheme.rs`）

use crate::models::{Adjustment, Entry};

use serde::Deserialize;

/// 水相锚点：O₂ 与 H₂O 的计算基准能量和参考能量（eV/分子）
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AqueousAnchors {
    /// 方案下计算得到的 O₂ 分子能量
    pub o2_computed: f64,

    /// 锚定的 O₂ 参考能量
    pub o2_reference: f64,

    /// 方案下计算得到的 H₂O 分子能量
    pub h2o_computed: f64,

    /// 锚定的 H₂O 参考能量
    pub h2o_reference: f64,
}

impl AqueousAnchors {
    /// 解两变量线性方程组，返回 (shift_O, shift_H)
    ///
    /// 系数矩阵 [[2, 0], [1, 2]] 是三角的，直接回代。
    pub fn shifts(&self) -> (f64, f64) {
        let shift_o = (self.o2_reference - self.o2_computed) / 2.0;
        let shift_h = (self.h2o_reference - self.h2o_computed - shift_o) / 2.0;
        (shift_o, shift_h)
    }
}

/// 水相修正器
///
/// 构造时解出平移量，之后对任意条目纯函数式应用。
#[derive(Debug, Clone)]
pub struct AqueousCorrection {
    shift_o: f64,
    shift_h: f64,
}

impl AqueousCorrection {
    pub fn new(anchors: AqueousAnchors) -> Self {
        let (shift_o, shift_h) = anchors.shifts();
        AqueousCorrection { shift_o, shift_h }
    }

    /// 对单个条目施加水相平移
    ///
    /// 不含 O 也不含 H 的条目原样返回。
    pub fn correct(&self, entry: &Entry) -> Entry {
        let n_o = entry.composition.get("O");
        let n_h = entry.composition.get("H");

        if n_o == 0.0 && n_h == 0.0 {
            return entry.clone();
        }

        let mut out = entry.clone();
        if n_o > 0.0 {
            let contribution = self.shift_o * n_o;
            out.correction += contribution;
            out.adjustments.push(Adjustment {
                name: "aqueous correction (O)".to_string(),
                value: contribution,
                uncertainty: 0.0,
            });
        }
        if n_h > 0.0 {
            let contribution = self.shift_h * n_h;
            out.correction += contribution;
            out.adjustments.push(Adjustment {
                name: "aqueous correction (H)".to_string(),
                value: contribution,
                uncertainty: 0.0,
            });
        }
        out
    }
}
