//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/` 和 `econv` 库
//! - 子模块: convert, diff, session, batch, swatch

pub mod batch;
pub mod convert;
pub mod diff;
pub mod session;
pub mod swatch;

use crate::cli::Commands;
use econv::error::Result;
use econv::Precision;

/// 执行命令
pub fn run(cmd: Commands, precision: Precision) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args, precision),
        Commands::Diff(args) => diff::execute(args, precision),
        Commands::Session(args) => session::execute(args, precision),
        Commands::Batch(args) => batch::execute(args, precision),
        Commands::Swatch(args) => swatch::execute(args, precision),
    }
}
