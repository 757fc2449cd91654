//! # session 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/session.rs`

use clap::Args;

/// session 子命令参数
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Start in pair (difference) mode
    #[arg(long, default_value_t = false)]
    pub pair: bool,
}
