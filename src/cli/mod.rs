//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 单值换算
//! - `diff`: 差值换算
//! - `session`: 交互式控件
//! - `batch`: CSV 批量换算
//! - `swatch`: 波长颜色
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, session, batch, swatch

pub mod batch;
pub mod convert;
pub mod session;
pub mod swatch;

use clap::{Parser, Subcommand};
use econv::{Precision, Unit};

/// econv - 能量等价单位换算工具
#[derive(Parser)]
#[command(name = "econv")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Convert between energy-equivalent units (Eh, eV, kcal/mol, kJ/mol, cm-1, K, MHz, nm)",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Number of significant digits in the output (clamped to 1-30)
    #[arg(
        short,
        long,
        global = true,
        env = "ECONV_PRECISION",
        default_value = "11",
        value_parser = parse_precision
    )]
    pub precision: Precision,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert one value to every unit
    Convert(convert::ConvertArgs),

    /// Convert two values and show their difference (A - B)
    Diff(convert::DiffArgs),

    /// Start an interactive conversion session
    Session(session::SessionArgs),

    /// Convert a column of a CSV file to every unit
    Batch(batch::BatchArgs),

    /// Show the colour of a wavelength (or of an energy given in any unit)
    Swatch(swatch::SwatchArgs),
}

/// 解析单位参数
pub fn parse_unit(s: &str) -> Result<Unit, String> {
    s.parse::<Unit>().map_err(|e| e.to_string())
}

/// 解析精度参数，超出范围时截断
pub fn parse_precision(s: &str) -> Result<Precision, String> {
    Precision::parse(s).ok_or_else(|| format!("'{}' is not a number", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_negative_value() {
        let cli = Cli::parse_from(["econv", "-p", "40", "convert", "-1.5", "ev"]);
        assert_eq!(cli.precision.digits(), 30);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.value, "-1.5");
                assert_eq!(args.unit, Unit::Electronvolt);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_unit_error() {
        assert!(parse_unit("parsec").is_err());
        assert!(parse_precision("many").is_err());
    }
}
