//! # 终端输出
//!
//! 带颜色标签的消息行、标题栏和色块。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};
use econv::color::Rgb;

const RULE_WIDTH: usize = 60;
const SWATCH_WIDTH: usize = 8;

fn tagged(tag: ColoredString, msg: &str) -> String {
    format!("{} {}", tag, msg)
}

pub fn print_success(msg: &str) {
    println!("{}", tagged("[OK]".green().bold(), msg));
}

/// 错误写到 stderr，其余写到 stdout
pub fn print_error(msg: &str) {
    eprintln!("{}", tagged("[ERR]".red().bold(), msg));
}

pub fn print_warning(msg: &str) {
    println!("{}", tagged("[WARN]".yellow().bold(), msg));
}

pub fn print_info(msg: &str) {
    println!("{}", tagged("[*]".blue().bold(), msg));
}

pub fn print_done(msg: &str) {
    println!("{}", tagged("[DONE]".green().bold(), msg));
}

/// 上下两条分隔线包住的标题
pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH).dimmed();
    println!("\n{}\n  {}\n{}\n", rule, title.bold(), rule);
}

/// 真彩色色块
pub fn swatch_block(rgb: Rgb) -> String {
    " ".repeat(SWATCH_WIDTH)
        .as_str()
        .on_truecolor(rgb.r, rgb.g, rgb.b)
        .to_string()
}
