//! # 能量单位定义
//!
//! 固定的 8 种能量等价单位。枚举的声明顺序即优先级顺序
//! (`Unit::ALL`)：需要“第一个有值的单位”时按此顺序查找。
//!
//! ## 依赖关系
//! - 被 `conversion/engine.rs`, `controller/` 使用
//! - 被 `cli/` 用作命令行参数类型

use crate::error::EconvError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 能量等价单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// 原子单位 (Hartree)，内部规范单位
    Hartree,
    /// 电子伏特 (eV)
    Electronvolt,
    /// kcal/mol
    KcalPerMol,
    /// kJ/mol
    KjPerMol,
    /// 波数 (cm⁻¹)
    Wavenumber,
    /// 温度等价 (K)
    Kelvin,
    /// 频率 (MHz)
    Megahertz,
    /// 波长 (nm)，与能量成反比
    Nanometer,
}

impl Unit {
    /// 单位总数
    pub const COUNT: usize = 8;

    /// 所有单位，按优先级排序
    pub const ALL: [Unit; Unit::COUNT] = [
        Unit::Hartree,
        Unit::Electronvolt,
        Unit::KcalPerMol,
        Unit::KjPerMol,
        Unit::Wavenumber,
        Unit::Kelvin,
        Unit::Megahertz,
        Unit::Nanometer,
    ];

    /// 在 `ALL` 中的位置
    pub fn index(self) -> usize {
        self as usize
    }

    /// 稳定的机器键名（CSV 列名、会话命令）
    pub fn key(self) -> &'static str {
        match self {
            Unit::Hartree => "hartree",
            Unit::Electronvolt => "ev",
            Unit::KcalPerMol => "kcal_per_mol",
            Unit::KjPerMol => "kj_per_mol",
            Unit::Wavenumber => "cm-1",
            Unit::Kelvin => "kelvin",
            Unit::Megahertz => "mhz",
            Unit::Nanometer => "nm",
        }
    }

    /// 显示用符号
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Hartree => "Eh",
            Unit::Electronvolt => "eV",
            Unit::KcalPerMol => "kcal/mol",
            Unit::KjPerMol => "kJ/mol",
            Unit::Wavenumber => "cm⁻¹",
            Unit::Kelvin => "K",
            Unit::Megahertz => "MHz",
            Unit::Nanometer => "nm",
        }
    }

    /// 人类可读名称
    pub fn label(self) -> &'static str {
        match self {
            Unit::Hartree => "Hartree",
            Unit::Electronvolt => "Electronvolt",
            Unit::KcalPerMol => "Kilocalorie per mole",
            Unit::KjPerMol => "Kilojoule per mole",
            Unit::Wavenumber => "Wavenumber",
            Unit::Kelvin => "Temperature equivalent",
            Unit::Megahertz => "Frequency",
            Unit::Nanometer => "Wavelength",
        }
    }

    /// 与规范单位是否为线性（比例）关系
    ///
    /// 非线性单位不参与差值模式下的 A/B 编辑。
    pub fn is_linear(self) -> bool {
        !matches!(self, Unit::Nanometer)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = EconvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_lowercase().as_str() {
            "hartree" | "eh" | "ha" | "au" | "a.u." => Unit::Hartree,
            "ev" | "electronvolt" => Unit::Electronvolt,
            "kcal_per_mol" | "kcal/mol" | "kcalmol" | "kcal" => Unit::KcalPerMol,
            "kj_per_mol" | "kj/mol" | "kjmol" | "kj" => Unit::KjPerMol,
            "cm-1" | "cm^-1" | "cm⁻¹" | "wavenumber" | "wn" => Unit::Wavenumber,
            "kelvin" | "k" => Unit::Kelvin,
            "mhz" | "megahertz" => Unit::Megahertz,
            "nm" | "wavelength" | "nanometer" => Unit::Nanometer,
            _ => return Err(EconvError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}
