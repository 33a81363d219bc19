//! # 能量修正引擎
//!
//! 编排校验、基序分类、修正表查找、修正累加与不确定度传播。
//! 条目经历 未校验 → 通过/拒绝 → 已修正 三个阶段；拒绝是高频的
//! 正常结果（返回 `None`），只有配置错误才上抛。
//!
//! ## 修正规则
//! - 单质成分是参考端元，不做任何修正
//! - 氧按阴离子基序查表（氧化物退回元素 O 修正），硫只在硫化物
//!   基序下应用元素 S 修正
//! - 其余元素成分修正与 Hubbard 无关，逐元素乘原子数累加
//! - 高级修正只作用于 Hubbard 运行，按电负性最高元素选择子表
//! - 不确定度按平方和开根合成：sqrt(Σ (σᵢ·nᵢ)²)，只计入贡献
//!   非零的规则
//!
//! 相同输入与配置下输出按位可复现：无随机性、无全局计数器。
//!
//! ## 依赖关系
//! - 使用 `compat/validator.rs`, `compat/anion.rs`, `compat/scheme.rs`
//! - 使用 `rayon` 并行处理批量条目

use crate::compat::anion;
use crate::compat::scheme::{CorrectionValue, Scheme};
use crate::compat::validator::{self, ValidationOutcome};
use crate::error::Result;
use crate::models::{Adjustment, AnionMotif, Entry};

use rayon::prelude::*;

/// 能量修正引擎
///
/// 持有一份不可变方案配置；跨条目无共享可变状态，可在任意多个
/// 线程上并发调用。
pub struct CorrectionEngine {
    scheme: Scheme,
}

impl CorrectionEngine {
    pub fn new(scheme: Scheme) -> Self {
        CorrectionEngine { scheme }
    }

    /// 校验条目与方案的兼容性
    pub fn validate(&self, entry: &Entry) -> Result<ValidationOutcome> {
        validator::validate(entry, &self.scheme)
    }

    /// 处理单个条目
    ///
    /// 拒绝返回 `Ok(None)`；通过则返回附加了修正、不确定度与明细的
    /// 新条目，原始能量字段不变。
    pub fn process(&self, entry: &Entry) -> Result<Option<Entry>> {
        match self.validate(entry)? {
            ValidationOutcome::Rejected(_) => Ok(None),
            ValidationOutcome::Accepted => {
                let adjustments = self.adjustments_for(entry);

                let mut out = entry.clone();
                out.correction = adjustments.iter().map(|a| a.value).sum();
                out.correction_uncertainty = adjustments
                    .iter()
                    .map(|a| a.uncertainty * a.uncertainty)
                    .sum::<f64>()
                    .sqrt();
                out.adjustments = adjustments;
                Ok(Some(out))
            }
        }
    }

    /// 批量处理条目
    ///
    /// 逐条独立处理（rayon 并行），被拒绝的条目从结果中过滤掉，
    /// 幸存条目保持输入相对顺序；配置错误上抛。
    pub fn process_many(&self, entries: &[Entry]) -> Result<Vec<Entry>> {
        let processed: Result<Vec<Option<Entry>>> =
            entries.par_iter().map(|e| self.process(e)).collect();
        Ok(processed?.into_iter().flatten().collect())
    }

    /// 返回条目的修正明细而不构造修正后的条目
    ///
    /// 拒绝返回 `Ok(None)`。
    pub fn explain(&self, entry: &Entry) -> Result<Option<Vec<Adjustment>>> {
        match self.validate(entry)? {
            ValidationOutcome::Rejected(_) => Ok(None),
            ValidationOutcome::Accepted => Ok(Some(self.adjustments_for(entry))),
        }
    }

    /// 组装一个已通过校验条目的有序修正列表
    fn adjustments_for(&self, entry: &Entry) -> Vec<Adjustment> {
        let comp = &entry.composition;
        let scheme = &self.scheme;

        // 单质条目是修正表的参考端元
        if comp.is_element() {
            return Vec::new();
        }

        let motif = anion::classify(comp, entry.structure.as_ref(), entry.oxide_type);
        let mut adjustments = Vec::new();

        // 氧：按基序查表，氧化物与未识别的基序退回元素 O 修正
        let n_o = comp.get("O");
        if n_o > 0.0 {
            let effective = if scheme.motif_aware {
                motif.unwrap_or(AnionMotif::Oxide)
            } else {
                AnionMotif::Oxide
            };
            let correction = match effective {
                AnionMotif::Oxide => scheme.composition_corrections.get("O").copied(),
                m => scheme
                    .motif_corrections
                    .get(&m)
                    .copied()
                    .or_else(|| scheme.composition_corrections.get("O").copied()),
            };
            if let Some(c) = correction {
                push_contribution(
                    &mut adjustments,
                    format!("{} anion correction ({})", scheme.name, effective),
                    c,
                    n_o,
                );
            }
        }

        // 硫：只有硫化物基序才应用元素 S 修正（硫酸盐按氧环境处理）
        let n_s = comp.get("S");
        if n_s > 0.0 && motif == Some(AnionMotif::Sulfide) {
            if let Some(c) = scheme.composition_corrections.get("S").copied() {
                push_contribution(
                    &mut adjustments,
                    format!("{} anion correction (sulfide)", scheme.name),
                    c,
                    n_s,
                );
            }
        }

        // 其余元素成分修正，与 Hubbard 无关
        for (element, c) in &scheme.composition_corrections {
            if element == "O" || element == "S" {
                continue;
            }
            let n = comp.get(element);
            if n > 0.0 {
                push_contribution(
                    &mut adjustments,
                    format!("{} composition correction ({})", scheme.name, element),
                    *c,
                    n,
                );
            }
        }

        // 高级修正：仅 Hubbard 运行，子表由电负性最高的元素决定
        if entry.parameters.is_hubbard {
            if let Some(table) = scheme.advanced_for(comp) {
                for (element, adv) in table {
                    let n = comp.get(element);
                    if n > 0.0 {
                        push_contribution(
                            &mut adjustments,
                            format!("{} advanced correction ({})", scheme.name, element),
                            CorrectionValue {
                                value: adv.value,
                                uncertainty: adv.uncertainty,
                            },
                            n,
                        );
                    }
                }
            }
        }

        adjustments
    }
}

/// 追加一条非零贡献；数值为零的规则不进入明细
fn push_contribution(
    adjustments: &mut Vec<Adjustment>,
    name: String,
    correction: CorrectionValue,
    count: f64,
) {
    let value = correction.value * count;
    if value != 0.0 {
        adjustments.push(Adjustment {
            name,
            value,
            uncertainty: correction.uncertainty * count,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::scheme::RunTypePolicy;
    use crate::models::{Atom, CalcParams, Crystal, Lattice, PotcarIdentity};
    use std::collections::BTreeMap;

    fn psp(titel: &str, hash: &str) -> PotcarIdentity {
        PotcarIdentity {
            titel: titel.to_string(),
            hash: Some(hash.to_string()),
        }
    }

    /// 组装测试条目：(元素, U 值) 列表为空时视为普通 GGA 运行
    fn entry(
        formula: &str,
        energy: f64,
        hubbards: &[(&str, f64)],
        potcars: &[(&str, &str)],
    ) -> Entry {
        let mut e = Entry::new(formula.parse().unwrap(), energy);
        let is_hubbard = !hubbards.is_empty();
        e.parameters = CalcParams {
            run_type: Some(if is_hubbard { "GGA+U" } else { "GGA" }.to_string()),
            is_hubbard,
            hubbards: hubbards
                .iter()
                .map(|(el, u)| (el.to_string(), *u))
                .collect::<BTreeMap<_, _>>(),
            potcar: Some(potcars.iter().map(|(t, h)| psp(t, h)).collect()),
        };
        e
    }

    fn mp2020_engine() -> CorrectionEngine {
        CorrectionEngine::new(Scheme::materials_project_2020().unwrap().scheme)
    }

    fn mp_legacy_engine() -> CorrectionEngine {
        CorrectionEngine::new(Scheme::materials_project_legacy().unwrap().scheme)
    }

    fn mit_engine() -> CorrectionEngine {
        CorrectionEngine::new(Scheme::mit().unwrap().scheme)
    }

    fn fe2o3(hubbards: &[(&str, f64)]) -> Entry {
        entry(
            "Fe2O3",
            -1.0,
            hubbards,
            &[
                ("PAW_PBE Fe_pv 06Sep2000", "994537de5c4122b7f1b77fb604476db4"),
                ("PAW_PBE O 08Apr2002", "7a25bc5b9a5393f46600a4939d357982"),
            ],
        )
    }

    // ─────────────────────────────────────────────────────────────
    // 修订表（mp2020）
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_mp2020_fe2o3_correction() {
        let corrected = mp2020_engine()
            .process(&fe2o3(&[("Fe", 5.3), ("O", 0.0)]))
            .unwrap()
            .unwrap();
        assert!((corrected.correction - (-2.231 * 2.0 + -0.721 * 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_mp2020_fe2o3_uncertainty() {
        let corrected = mp2020_engine()
            .process(&fe2o3(&[("Fe", 5.3), ("O", 0.0)]))
            .unwrap()
            .unwrap();
        let expected = ((2.0f64 * 0.0079).powi(2) + (3.0f64 * 0.0016).powi(2)).sqrt();
        assert!((corrected.correction_uncertainty - expected).abs() < 1e-9);
    }

    #[test]
    fn test_mp2020_rejects_gga_run_of_u_compound() {
        assert!(mp2020_engine().process(&fe2o3(&[])).unwrap().is_none());
    }

    #[test]
    fn test_mp2020_rejects_wrong_u() {
        assert!(mp2020_engine()
            .process(&fe2o3(&[("Fe", 5.2), ("O", 0.0)]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_gga_only_scheme_accepts_plain_run() {
        let gga = CorrectionEngine::new(
            Scheme::materials_project_2020()
                .unwrap()
                .scheme
                .with_run_type_policy(RunTypePolicy::GgaOnly),
        );
        assert!(gga.process(&fe2o3(&[])).unwrap().is_some());
        assert!(gga
            .process(&fe2o3(&[("Fe", 5.3), ("O", 0.0)]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_mp2020_fluoride_correction() {
        let fef3 = entry(
            "FeF3",
            -2.0,
            &[("Fe", 5.3), ("F", 0.0)],
            &[
                ("PAW_PBE Fe_pv 06Sep2000", "994537de5c4122b7f1b77fb604476db4"),
                ("PAW_PBE F 08Apr2002", "180141c33d032bfbfff30b3bea9d23dd"),
            ],
        );
        let corrected = mp2020_engine().process(&fef3).unwrap().unwrap();
        assert!((corrected.correction - (-0.46 * 3.0 + -2.231)).abs() < 1e-9);

        let expected_sigma = ((3.0f64 * 0.0025).powi(2) + 0.0079f64.powi(2)).sqrt();
        assert!((corrected.correction_uncertainty - expected_sigma).abs() < 1e-9);
    }

    #[test]
    fn test_mp2020_sulfide_correction() {
        let fes = entry(
            "FeS",
            -1.0,
            &[],
            &[
                ("PAW_PBE Fe_pv 06Sep2000", "994537de5c4122b7f1b77fb604476db4"),
                ("PAW_PBE S 08Apr2002", "f7f8e4a74a6cbb8d63e41f4373b54df2"),
            ],
        );
        let corrected = mp2020_engine().process(&fes).unwrap().unwrap();
        assert!((corrected.correction - (-0.633)).abs() < 1e-9);
        assert!((corrected.correction_uncertainty - 0.0121).abs() < 1e-9);
    }

    #[test]
    fn test_mp2020_hydride_uncertainty() {
        let lih = entry(
            "LiH",
            -2.0,
            &[],
            &[
                ("PAW_PBE Li_sv 10Sep2004", "8245d7383d7556214082aa40a887cd96"),
                ("PAW_PBE H 15Jun2001", "bb43c666e3d36577264afe07669e9582"),
            ],
        );
        let corrected = mp2020_engine().process(&lih).unwrap().unwrap();
        assert!((corrected.correction_uncertainty - 0.0013).abs() < 1e-9);
    }

    #[test]
    fn test_elemental_reference_gets_no_correction() {
        let o = entry(
            "O",
            -1.0,
            &[],
            &[("PAW_PBE O 08Apr2002", "7a25bc5b9a5393f46600a4939d357982")],
        );
        let corrected = mp2020_engine().process(&o).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-1.0)).abs() < 1e-9);
        assert!(corrected.correction_uncertainty.abs() < 1e-12);
        assert!(corrected.adjustments.is_empty());
    }

    #[test]
    fn test_mp2020_rejects_hubbard_sulfide() {
        // MP 方案对硫化物不定义 U 值
        let fes2 = entry(
            "FeS2",
            -2.0,
            &[("Fe", 5.3), ("S", 0.0)],
            &[
                ("PAW_PBE Fe_pv 06Sep2000", "994537de5c4122b7f1b77fb604476db4"),
                ("PAW_PBE S 08Apr2002", "f7f8e4a74a6cbb8d63e41f4373b54df2"),
            ],
        );
        assert!(mp2020_engine().process(&fes2).unwrap().is_none());
    }

    #[test]
    fn test_process_many_filters_and_preserves_order() {
        let good1 = fe2o3(&[("Fe", 5.3), ("O", 0.0)]);
        let bad = fe2o3(&[("Fe", 4.3), ("O", 0.0)]);
        let mut good2 = entry(
            "Fe3O4",
            -2.0,
            &[("Fe", 5.3), ("O", 0.0)],
            &[
                ("PAW_PBE Fe_pv 06Sep2000", "994537de5c4122b7f1b77fb604476db4"),
                ("PAW_PBE O 08Apr2002", "7a25bc5b9a5393f46600a4939d357982"),
            ],
        );
        good2.id = Some("fe3o4".to_string());

        let survivors = mp2020_engine()
            .process_many(&[good1.clone(), bad, good2.clone()])
            .unwrap();
        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0].composition.formula(), "Fe2O3");
        assert_eq!(survivors[1].id.as_deref(), Some("fe3o4"));
    }

    #[test]
    fn test_determinism() {
        let engine = mp2020_engine();
        let input = fe2o3(&[("Fe", 5.3), ("O", 0.0)]);
        let a = engine.process(&input).unwrap().unwrap();
        let b = engine.process(&input).unwrap().unwrap();
        assert_eq!(a.correction.to_bits(), b.correction.to_bits());
        assert_eq!(
            a.correction_uncertainty.to_bits(),
            b.correction_uncertainty.to_bits()
        );
    }

    #[test]
    fn test_explain_matches_process() {
        let engine = mp2020_engine();
        let input = fe2o3(&[("Fe", 5.3), ("O", 0.0)]);
        let adjustments = engine.explain(&input).unwrap().unwrap();
        let corrected = engine.process(&input).unwrap().unwrap();

        let total: f64 = adjustments.iter().map(|a| a.value).sum();
        assert!((total - corrected.correction).abs() < 1e-12);
        assert_eq!(adjustments.len(), corrected.adjustments.len());
        // 阴离子修正先于高级修正
        assert!(adjustments[0].name.contains("anion"));
        assert!(adjustments[1].name.contains("advanced"));
    }

    // ─────────────────────────────────────────────────────────────
    // 旧版表（mp-legacy）
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn test_legacy_fe2o3_correction() {
        let corrected = mp_legacy_engine()
            .process(&fe2o3(&[("Fe", 5.3), ("O", 0.0)]))
            .unwrap()
            .unwrap();
        assert!((corrected.correction - (-2.733 * 2.0 + -0.70229 * 3.0)).abs() < 1e-9);
        // 旧表不携带不确定度
        assert!(corrected.correction_uncertainty.abs() < 1e-12);
    }

    #[test]
    fn test_legacy_fluoride_has_no_anion_correction() {
        let fef3 = entry(
            "FeF3",
            -2.0,
            &[("Fe", 5.3), ("F", 0.0)],
            &[
                ("PAW_PBE Fe_pv 06Sep2000", "994537de5c4122b7f1b77fb604476db4"),
                ("PAW_PBE F 08Apr2002", "180141c33d032bfbfff30b3bea9d23dd"),
            ],
        );
        let corrected = mp_legacy_engine().process(&fef3).unwrap().unwrap();
        assert!((corrected.correction - (-2.733)).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_sulfide_correction() {
        let fes = entry(
            "FeS",
            -1.0,
            &[],
            &[
                ("PAW_PBE Fe_pv 06Sep2000", "994537de5c4122b7f1b77fb604476db4"),
                ("PAW_PBE S 08Apr2002", "f7f8e4a74a6cbb8d63e41f4373b54df2"),
            ],
        );
        let corrected = mp_legacy_engine().process(&fes).unwrap().unwrap();
        assert!((corrected.correction - (-0.66346)).abs() < 1e-9);
    }

    // ─────────────────────────────────────────────────────────────
    // MIT 表与基序相关的修正
    // ─────────────────────────────────────────────────────────────

    fn mit_entry(formula: &str, energy: f64, hubbards: &[(&str, f64)], elements: &[&str]) -> Entry {
        let titles: BTreeMap<&str, (&str, &str)> = BTreeMap::from([
            ("Fe", ("PAW_PBE Fe 06Sep2000", "9530da8244e4dac17580869b4adab115")),
            ("O", ("PAW_PBE O 08Apr2002", "7a25bc5b9a5393f46600a4939d357982")),
            ("F", ("PAW_PBE F 08Apr2002", "180141c33d032bfbfff30b3bea9d23dd")),
            ("S", ("PAW_PBE S 08Apr2002", "d368db6899d8839859bbee4811a42a88")),
            ("Li", ("PAW_PBE Li 17Jan2003", "65e83282d1707ec078c1012afbd05be8")),
            ("Ni", ("PAW_PBE Ni 06Sep2000", "653f5772e68b2c7fd87ffd1086c0d710")),
        ]);
        let potcars: Vec<(&str, &str)> = elements.iter().map(|el| titles[el]).collect();
        entry(formula, energy, hubbards, &potcars)
    }

    #[test]
    fn test_mit_fe2o3_correction() {
        let corrected = mit_engine()
            .process(&mit_entry("Fe2O3", -1.0, &[("Fe", 4.0), ("O", 0.0)], &["Fe", "O"]))
            .unwrap()
            .unwrap();
        assert!((corrected.correction - (-1.723 * 2.0 + -0.66975 * 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_mit_sulfide_advanced_correction() {
        // MIT 对含铁硫化物要求 U=1.9，高级修正取硫化物子表
        let corrected = mit_engine()
            .process(&mit_entry("FeS2", -2.0, &[("Fe", 1.9), ("S", 0.0)], &["Fe", "S"]))
            .unwrap()
            .unwrap();
        assert!((corrected.correction - (-1.113)).abs() < 1e-9);
    }

    #[test]
    fn test_mit_rejects_nickel_sulfide_hubbard_run() {
        // MIT 硫化物子表只覆盖 Fe/Mn
        assert!(mit_engine()
            .process(&mit_entry("NiS2", -2.0, &[("Ni", 1.9), ("S", 0.0)], &["Ni", "S"]))
            .unwrap()
            .is_none());
        assert!(mit_engine()
            .process(&mit_entry("NiS2", -2.0, &[], &["Ni", "S"]))
            .unwrap()
            .is_some());
    }

    fn li2o2_structure() -> Crystal {
        let lattice = Lattice::from_parameters(
            3.159597, 3.159572, 7.685205, 89.999884, 89.999674, 60.000510,
        );
        Crystal::new(
            lattice,
            vec![
                Atom::new("Li", [0.666656, 0.666705, 0.750001]),
                Atom::new("Li", [0.333342, 0.333378, 0.250001]),
                Atom::new("Li", [0.000001, 0.000041, 0.500001]),
                Atom::new("Li", [0.000001, 0.000021, 0.000001]),
                Atom::new("O", [0.333347, 0.333332, 0.649191]),
                Atom::new("O", [0.333322, 0.333353, 0.850803]),
                Atom::new("O", [0.666666, 0.666686, 0.350813]),
                Atom::new("O", [0.666665, 0.666684, 0.149189]),
            ],
        )
    }

    #[test]
    fn test_mit_peroxide_specific_correction() {
        let mut e = mit_entry("Li4O4", -3.0, &[], &["Li", "O"]);
        e.structure = Some(li2o2_structure());
        let corrected = mit_engine().process(&e).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-3.0 - 0.44317 * 4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_motif_blind_scheme_applies_oxide_value() {
        let engine = CorrectionEngine::new(Scheme::mit().unwrap().scheme.with_motif_aware(false));
        let mut e = mit_entry("Li4O4", -3.0, &[], &["Li", "O"]);
        e.structure = Some(li2o2_structure());
        let corrected = engine.process(&e).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-3.0 - 0.66975 * 4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_mit_superoxide_from_structure() {
        let lattice = Lattice::from_vectors([
            [3.985034, 0.0, 0.0],
            [0.0, 4.881506, 0.0],
            [0.0, 0.0, 2.959824],
        ]);
        let mut e = mit_entry("Li2O4", -3.0, &[], &["Li", "O"]);
        e.structure = Some(Crystal::new(
            lattice,
            vec![
                Atom::new("Li", [0.5, 0.5, 0.5]),
                Atom::new("Li", [0.0, 0.0, 0.0]),
                Atom::new("O", [0.632568, 0.085090, 0.5]),
                Atom::new("O", [0.367432, 0.914910, 0.5]),
                Atom::new("O", [0.132568, 0.414910, 0.0]),
                Atom::new("O", [0.867432, 0.585090, 0.0]),
            ],
        ));
        let corrected = mit_engine().process(&e).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-3.0 - 0.13893 * 4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_mit_superoxide_from_cached_tag() {
        // 无结构坐标的条目沿用缓存基序，结果与有结构时一致
        let mut e = mit_entry("Li2O4", -3.0, &[], &["Li", "O"]);
        e.oxide_type = Some(AnionMotif::Superoxide);
        let corrected = mit_engine().process(&e).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-3.0 - 0.13893 * 4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_mit_ozonide_passes_through() {
        let lattice = Lattice::from_parameters(
            3.999911, 3.999911, 3.999911, 133.847504, 102.228244, 95.477342,
        );
        let mut e = mit_entry("LiO3", -3.0, &[], &["Li", "O"]);
        e.structure = Some(Crystal::new(
            lattice,
            vec![
                Atom::new("Li", [0.513004, 0.513004, 1.000000]),
                Atom::new("O", [0.017616, 0.017616, 0.000000]),
                Atom::new("O", [0.649993, 0.874790, 0.775203]),
                Atom::new("O", [0.099587, 0.874790, 0.224797]),
            ],
        ));

        // 臭氧化物在基序表里显式取 0
        let corrected = mit_engine().process(&e).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-3.0)).abs() < 1e-9);

        // 不识别基序的配置退回氧化物修正
        let blind = CorrectionEngine::new(Scheme::mit().unwrap().scheme.with_motif_aware(false));
        let corrected = blind.process(&e).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-3.0 - 3.0 * 0.66975)).abs() < 1e-4);
    }

    #[test]
    fn test_mit_oxide_structure() {
        let lattice = Lattice::from_parameters(3.278, 3.278, 3.278, 60.0, 60.0, 60.0);
        let mut e = mit_entry("Li2O", -3.0, &[], &["Li", "O"]);
        e.structure = Some(Crystal::new(
            lattice,
            vec![
                Atom::new("Li", [0.25, 0.25, 0.25]),
                Atom::new("Li", [0.75, 0.75, 0.75]),
                Atom::new("O", [0.0, 0.0, 0.0]),
            ],
        ));
        let corrected = mit_engine().process(&e).unwrap().unwrap();
        assert!((corrected.corrected_energy() - (-3.0 - 0.66975)).abs() < 1e-4);
    }
}
