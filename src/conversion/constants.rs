//! # 物理常数
//!
//! CODATA 推荐值。规范单位为 Hartree（原子单位能量）。

/// 1 Hartree 对应的焦耳数
pub const HARTREE_J: f64 = 4.359744722206e-18;

/// 1 eV 对应的焦耳数（精确值）
pub const EV_J: f64 = 1.602176634e-19;

/// 阿伏伽德罗常数 (mol⁻¹，精确值)
pub const AVOGADRO: f64 = 6.02214076e23;

/// 1 kcal = 4184 J（热化学卡）
pub const J_PER_KCAL: f64 = 4184.0;

/// eV / Hartree
pub const EV_PER_HARTREE: f64 = 27.211386245981;

/// cm⁻¹ / Hartree
pub const WAVENUMBER_PER_HARTREE: f64 = 219474.63136314;

/// K / Hartree
pub const KELVIN_PER_HARTREE: f64 = 315775.02480398;

/// Hz / Hartree
pub const HZ_PER_HARTREE: f64 = 6.5796839204999e15;

/// λ(nm) · ν̃(cm⁻¹) = 1e7
pub const NM_CM_INV: f64 = 1e7;

/// (kcal/mol) / Hartree
pub const KCAL_PER_MOL_PER_HARTREE: f64 = HARTREE_J * AVOGADRO / J_PER_KCAL;

/// (kJ/mol) / Hartree
pub const KJ_PER_MOL_PER_HARTREE: f64 = HARTREE_J * AVOGADRO / 1000.0;

/// MHz / Hartree
pub const MHZ_PER_HARTREE: f64 = HZ_PER_HARTREE / 1e6;
