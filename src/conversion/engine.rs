//! # 换算实现
//!
//! ## 换算关系
//! ```text
//! 线性单位:  E[unit]    = E[Eh] × factor(unit)
//! 波长:      ν̃[cm⁻¹]   = 1e7 / λ[nm]
//!            E[Eh]      = ν̃ / WAVENUMBER_PER_HARTREE
//! ```
//!
//! 除零或负波长得到非有限值，调用方应将其视为“无值”。
//!
//! ## 依赖关系
//! - 被 `conversion/mod.rs` 导出
//! - 使用 `conversion/constants.rs`, `models/unit.rs`

use super::constants::*;
use crate::models::Unit;

use std::ops::Index;

/// 线性单位相对 Hartree 的比例因子；波长返回 `None`
pub fn per_hartree(unit: Unit) -> Option<f64> {
    match unit {
        Unit::Hartree => Some(1.0),
        Unit::Electronvolt => Some(EV_PER_HARTREE),
        Unit::KcalPerMol => Some(KCAL_PER_MOL_PER_HARTREE),
        Unit::KjPerMol => Some(KJ_PER_MOL_PER_HARTREE),
        Unit::Wavenumber => Some(WAVENUMBER_PER_HARTREE),
        Unit::Kelvin => Some(KELVIN_PER_HARTREE),
        Unit::Megahertz => Some(MHZ_PER_HARTREE),
        Unit::Nanometer => None,
    }
}

/// 将 `unit` 下的数值转换为 Hartree
pub fn to_canonical(value: f64, unit: Unit) -> f64 {
    match per_hartree(unit) {
        Some(factor) => value / factor,
        None => {
            if value < 0.0 {
                return f64::NAN;
            }
            let wavenumber = NM_CM_INV / value;
            wavenumber / WAVENUMBER_PER_HARTREE
        }
    }
}

/// 将 Hartree 数值一次性转换为全部单位
pub fn from_canonical(value: f64) -> UnitValues {
    let mut values = [0.0; Unit::COUNT];
    for unit in Unit::ALL {
        values[unit.index()] = match per_hartree(unit) {
            Some(factor) => value * factor,
            None => NM_CM_INV / (value * WAVENUMBER_PER_HARTREE),
        };
    }
    UnitValues(values)
}

/// 单位间直接换算
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    from_canonical(to_canonical(value, from))[to]
}

/// 同一能量在全部单位下的数值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitValues([f64; Unit::COUNT]);

impl UnitValues {
    pub fn get(&self, unit: Unit) -> f64 {
        self.0[unit.index()]
    }

    /// 按优先级顺序迭代 (单位, 数值)
    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL.iter().map(move |&u| (u, self.get(u)))
    }
}

impl Index<Unit> for UnitValues {
    type Output = f64;

    fn index(&self, unit: Unit) -> &f64 {
        &self.0[unit.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel(actual: f64, expected: f64, tol: f64) {
        let err = ((actual - expected) / expected).abs();
        assert!(
            err < tol,
            "expected {expected}, got {actual} (relative error {err:e})"
        );
    }

    #[test]
    fn test_round_trip_every_unit() {
        for unit in Unit::ALL {
            for v in [1.0, 0.0375, 532.0, 1.5e-7, 3.2e9] {
                let back = from_canonical(to_canonical(v, unit))[unit];
                assert_rel(back, v, 1e-9);
            }
        }
    }

    #[test]
    fn test_linear_cross_consistency() {
        // 比值直接由基本常数得出，与比例因子表无关
        assert_rel(convert(12.5, Unit::KcalPerMol, Unit::KjPerMol), 12.5 * 4.184, 1e-12);
        assert_rel(
            convert(1.0, Unit::Electronvolt, Unit::KcalPerMol),
            EV_J * AVOGADRO / J_PER_KCAL,
            1e-11,
        );
        assert_rel(
            convert(1.0, Unit::Electronvolt, Unit::KjPerMol),
            EV_J * AVOGADRO / 1000.0,
            1e-11,
        );
        assert_rel(
            convert(1.0, Unit::Hartree, Unit::Electronvolt),
            HARTREE_J / EV_J,
            1e-11,
        );
        // 光速 c = 29979.2458 MHz·cm
        assert_rel(convert(1.0, Unit::Wavenumber, Unit::Megahertz), 29979.2458, 1e-9);
        // 第二辐射常数 hc/k = 1.438776877 K·cm
        assert_rel(convert(1.0, Unit::Wavenumber, Unit::Kelvin), 1.438776877, 1e-9);
    }

    #[test]
    fn test_one_hartree() {
        let values = from_canonical(1.0);
        assert_eq!(values[Unit::Hartree], 1.0);
        assert_rel(values[Unit::Electronvolt], 27.211386245981, 1e-14);
        assert_rel(values[Unit::Wavenumber], 219474.63136314, 1e-14);
        assert_rel(values[Unit::Kelvin], 315775.02480398, 1e-14);
        assert_rel(values[Unit::Megahertz], 6.5796839204999e9, 1e-14);
        assert_rel(values[Unit::Nanometer], 45.563352529131826, 1e-12);
    }

    #[test]
    fn test_wavelength_to_wavenumber() {
        // 500 nm ↔ 20000 cm⁻¹
        assert_rel(convert(500.0, Unit::Nanometer, Unit::Wavenumber), 20000.0, 1e-12);
        assert_rel(convert(20000.0, Unit::Wavenumber, Unit::Nanometer), 500.0, 1e-12);
    }

    #[test]
    fn test_wavelength_edge_cases() {
        assert!(!to_canonical(0.0, Unit::Nanometer).is_finite());
        assert!(to_canonical(-10.0, Unit::Nanometer).is_nan());
        assert!(!from_canonical(0.0)[Unit::Nanometer].is_finite());
    }

    #[test]
    fn test_zero_energy_linear_units() {
        let values = from_canonical(0.0);
        for (unit, v) in values.iter() {
            if unit.is_linear() {
                assert_eq!(v, 0.0);
            }
        }
    }
}
