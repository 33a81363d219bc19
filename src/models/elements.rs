//! # 元素属性数据库
//!
//! 提供 Pauling 电负性标度的静态查询表。
//!
//! 赝势 U 值表与高级修正表按化合物中电负性最高的元素（通常是阴离子）
//! 分组，因此需要一个与外部数据库无关的电负性标度。
//!
//! ## 数据来源
//! Pauling 标度，CRC Handbook of Chemistry and Physics, 97th ed.
//!
//! ## 依赖关系
//! - 被 `models/composition.rs` 调用确定电负性最高的元素
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// Pauling 电负性表
pub static ELECTRONEGATIVITY: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // 第一、二周期
    m.insert("H", 2.20);
    m.insert("Li", 0.98);
    m.insert("Be", 1.57);
    m.insert("B", 2.04);
    m.insert("C", 2.55);
    m.insert("N", 3.04);
    m.insert("O", 3.44);
    m.insert("F", 3.98);

    // 第三周期
    m.insert("Na", 0.93);
    m.insert("Mg", 1.31);
    m.insert("Al", 1.61);
    m.insert("Si", 1.90);
    m.insert("P", 2.19);
    m.insert("S", 2.58);
    m.insert("Cl", 3.16);

    // 第四周期
    m.insert("K", 0.82);
    m.insert("Ca", 1.00);
    m.insert("Sc", 1.36);
    m.insert("Ti", 1.54);
    m.insert("V", 1.63);
    m.insert("Cr", 1.66);
    m.insert("Mn", 1.55);
    m.insert("Fe", 1.83);
    m.insert("Co", 1.88);
    m.insert("Ni", 1.91);
    m.insert("Cu", 1.90);
    m.insert("Zn", 1.65);
    m.insert("Ga", 1.81);
    m.insert("Ge", 2.01);
    m.insert("As", 2.18);
    m.insert("Se", 2.55);
    m.insert("Br", 2.96);

    // 第五周期
    m.insert("Rb", 0.82);
    m.insert("Sr", 0.95);
    m.insert("Y", 1.22);
    m.insert("Zr", 1.33);
    m.insert("Nb", 1.60);
    m.insert("Mo", 2.16);
    m.insert("Tc", 1.90);
    m.insert("Ru", 2.20);
    m.insert("Rh", 2.28);
    m.insert("Pd", 2.20);
    m.insert("Ag", 1.93);
    m.insert("Cd", 1.69);
    m.insert("In", 1.78);
    m.insert("Sn", 1.96);
    m.insert("Sb", 2.05);
    m.insert("Te", 2.10);
    m.insert("I", 2.66);

    // 第六周期
    m.insert("Cs", 0.79);
    m.insert("Ba", 0.89);
    m.insert("La", 1.10);
    m.insert("Ce", 1.12);
    m.insert("Pr", 1.13);
    m.insert("Nd", 1.14);
    m.insert("Sm", 1.17);
    m.insert("Eu", 1.20);
    m.insert("Gd", 1.20);
    m.insert("Tb", 1.10);
    m.insert("Dy", 1.22);
    m.insert("Ho", 1.23);
    m.insert("Er", 1.24);
    m.insert("Tm", 1.25);
    m.insert("Yb", 1.10);
    m.insert("Lu", 1.27);
    m.insert("Hf", 1.30);
    m.insert("Ta", 1.50);
    m.insert("W", 2.36);
    m.insert("Re", 1.90);
    m.insert("Os", 2.20);
    m.insert("Ir", 2.20);
    m.insert("Pt", 2.28);
    m.insert("Au", 2.54);
    m.insert("Hg", 2.00);
    m.insert("Tl", 1.62);
    m.insert("Pb", 2.33);
    m.insert("Bi", 2.02);

    // 锕系（计算数据库里常见的几个）
    m.insert("Th", 1.30);
    m.insert("U", 1.38);
    m.insert("Np", 1.36);
    m.insert("Pu", 1.28);
    m.insert("Am", 1.13);

    m
});

/// 查询元素的 Pauling 电负性
///
/// 表中没有的元素返回 `None`，调用方按 0 处理（视为弱电负性金属）。
pub fn electronegativity(symbol: &str) -> Option<f64> {
    ELECTRONEGATIVITY.get(symbol).copied()
}
