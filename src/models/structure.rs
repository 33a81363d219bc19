//! # 晶体结构数据模型
//!
//! 定义周期性原子排布的最小表示，供阴离子环境分类器查询近邻距离。
//!
//! ## 依赖关系
//! - 被 `models/entry.rs` 和 `compat/anion.rs` 使用
//! - 无外部模块依赖

use crate::models::Composition;

use serde::{Deserialize, Serialize};

/// 晶格参数表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let alpha_rad = alpha.to_radians();
        let beta_rad = beta.to_radians();
        let gamma_rad = gamma.to_radians();

        let cos_alpha = alpha_rad.cos();
        let cos_beta = beta_rad.cos();
        let cos_gamma = gamma_rad.cos();
        let sin_gamma = gamma_rad.sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();
        let c_vec = [c1, c2, c3];

        Lattice {
            matrix: [a_vec, b_vec, c_vec],
        }
    }

    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = norm(&a_vec);
        let b = norm(&b_vec);
        let c = norm(&c_vec);

        let alpha = (dot(&b_vec, &c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(&a_vec, &c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(&a_vec, &b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积
    pub fn volume(&self) -> f64 {
        let a = self.matrix[0];
        let b = self.matrix[1];
        let c = self.matrix[2];

        // 行列式计算
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// 分数坐标转笛卡尔坐标
    pub fn frac_to_cart(&self, frac: &[f64; 3]) -> [f64; 3] {
        let m = &self.matrix;
        [
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ]
    }

    /// 两个分数坐标间的最小镜像距离（Å）
    ///
    /// 先把分数坐标差归约到 [-0.5, 0.5)，再在 ±1 晶胞范围内搜索最短
    /// 笛卡尔距离。对键长尺度（约 1-2 Å）的查询，即使在高度倾斜的
    /// 三斜晶胞中也足够。
    pub fn min_image_distance(&self, f1: &[f64; 3], f2: &[f64; 3]) -> f64 {
        let mut df = [0.0; 3];
        for i in 0..3 {
            let d = f2[i] - f1[i];
            df[i] = d - d.round();
        }

        let mut min_sq = f64::MAX;
        for sx in -1..=1 {
            for sy in -1..=1 {
                for sz in -1..=1 {
                    let shifted = [
                        df[0] + sx as f64,
                        df[1] + sy as f64,
                        df[2] + sz as f64,
                    ];
                    let cart = self.frac_to_cart(&shifted);
                    let sq = cart[0] * cart[0] + cart[1] * cart[1] + cart[2] * cart[2];
                    if sq < min_sq {
                        min_sq = sq;
                    }
                }
            }
        }

        min_sq.sqrt()
    }
}

/// 原子信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 分数坐标 [x, y, z]
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crystal {
    /// 晶格
    pub lattice: Lattice,

    /// 原子列表
    pub atoms: Vec<Atom>,
}

impl Crystal {
    pub fn new(lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Crystal { lattice, atoms }
    }

    /// 由原子列表统计化学成分
    pub fn composition(&self) -> Composition {
        Composition::from_counts(self.atoms.iter().map(|a| (a.element.clone(), 1.0)))
    }

    /// 某元素所有原子的分数坐标
    pub fn sites_of(&self, element: &str) -> Vec<[f64; 3]> {
        self.atoms
            .iter()
            .filter(|a| a.element == element)
            .map(|a| a.position)
            .collect()
    }
}

/// 向量点积
fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 向量模长
fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_from_parameters_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 5.0).abs() < 1e-6);
        assert!((b - 5.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let vol = lattice.volume().abs();

        // 5^3 = 125
        assert!((vol - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_min_image_distance_same_cell() {
        let lattice = Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]);
        let d = lattice.min_image_distance(&[0.1, 0.0, 0.0], &[0.4, 0.0, 0.0]);
        assert!((d - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_min_image_distance_across_boundary() {
        // 跨晶胞边界的一对原子：0.95 与 0.05 相距 0.1 个晶胞
        let lattice = Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]);
        let d = lattice.min_image_distance(&[0.95, 0.5, 0.5], &[0.05, 0.5, 0.5]);
        assert!((d - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_min_image_distance_triclinic() {
        let lattice = Lattice::from_parameters(4.0, 4.0, 4.0, 133.8, 102.2, 95.5);
        // 距离对称性
        let d1 = lattice.min_image_distance(&[0.1, 0.2, 0.3], &[0.8, 0.9, 0.1]);
        let d2 = lattice.min_image_distance(&[0.8, 0.9, 0.1], &[0.1, 0.2, 0.3]);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_crystal_composition() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let atoms = vec![
            Atom::new("Li", [0.0, 0.0, 0.0]),
            Atom::new("Li", [0.5, 0.5, 0.5]),
            Atom::new("O", [0.25, 0.25, 0.25]),
        ];
        let crystal = Crystal::new(lattice, atoms);

        let comp = crystal.composition();
        assert!((comp.get("Li") - 2.0).abs() < 1e-9);
        assert!((comp.get("O") - 1.0).abs() < 1e-9);
        assert_eq!(crystal.sites_of("O").len(), 1);
    }
}
