//! # batch 子命令 CLI 定义
//!
//! 批量换算 CSV 文件中的一列数值
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use super::parse_unit;
use clap::Args;
use econv::Unit;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input CSV file (with a header row)
    pub input: PathBuf,

    /// Column holding the values to convert
    #[arg(short, long, default_value = "value")]
    pub column: String,

    /// Unit of the values in the column
    #[arg(short, long, value_parser = parse_unit)]
    pub unit: Unit,

    /// Output CSV file
    #[arg(short, long, default_value = "converted.csv")]
    pub output: PathBuf,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
