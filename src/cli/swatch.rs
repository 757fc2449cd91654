//! # swatch 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/swatch.rs`

use super::parse_unit;
use clap::Args;
use econv::Unit;
use std::path::PathBuf;

/// swatch 子命令参数
#[derive(Args, Debug)]
pub struct SwatchArgs {
    /// Wavelength, or an energy in the unit given by --unit
    pub value: String,

    /// Unit of the value
    #[arg(short, long, default_value = "nm", value_parser = parse_unit)]
    pub unit: Unit,

    /// Save the swatch as an image (.png or .svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Edge length of the saved swatch in pixels
    #[arg(long, default_value_t = 200)]
    pub size: u32,

    /// Copy the hex colour to the clipboard
    #[arg(long, default_value_t = false)]
    pub copy: bool,
}
