//! # convert / diff 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`, `commands/diff.rs`

use super::parse_unit;
use clap::Args;
use econv::Unit;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Value to convert (its significant digits raise the output precision)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Unit of the value (hartree, ev, kcal_per_mol, kj_per_mol, cm-1, kelvin, mhz, nm)
    #[arg(value_parser = parse_unit)]
    pub unit: Unit,

    /// Write CSV (unit,value) to stdout instead of a table
    #[arg(long, default_value_t = false)]
    pub csv: bool,
}

/// diff 子命令参数
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// First value (A)
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Second value (B)
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    /// Unit of both values (wavelength is not allowed)
    #[arg(value_parser = parse_unit)]
    pub unit: Unit,
}
