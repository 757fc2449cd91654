//! # 批量换算进度条
//!
//! 输出重定向（stderr 不是终端）时进度条隐藏，不污染日志。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif`, `console`

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({eta}) {msg}";

/// 按行计数的进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let target = if console::Term::stderr().is_term() {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    };

    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let pb = ProgressBar::with_draw_target(Some(len), target);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
