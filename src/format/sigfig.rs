//! # 有效数字推断与输入解析
//!
//! ## 数字语法
//! ```text
//! [+-] digits [. digits] [e|E [+-] digits]
//! ```
//! 整数部分或小数部分至少有一位数字；首尾空白忽略。
//!
//! ## 有效数字规则
//! - 前导 0 不计
//! - 整数末尾的 0 计入（`1200` → 4）
//! - 小数点后的 0 计入（`0.00450` → 3）
//! - 全 0 计为 1 位；空串或非数字为 0
//!
//! ## 依赖关系
//! - 被 `controller/` 使用（精度自动提升）
//! - 使用 `regex`

use regex::Regex;
use std::sync::LazyLock;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?(?:[eE][+-]?[0-9]+)?$").unwrap()
});

/// 一次用户输入的解析结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// 空输入（清空）
    Empty,
    /// 不构成有限实数的文本
    Invalid,
    /// 有效数字
    Number { value: f64, significant_digits: usize },
}

/// 拆出尾数的全部数字（整数部分 + 小数部分）
fn mantissa_digits(text: &str) -> Option<String> {
    let caps = NUMBER_PATTERN.captures(text)?;
    let int = caps.name("int").map_or("", |m| m.as_str());
    let frac = caps.name("frac").map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    Some(format!("{}{}", int, frac))
}

/// 统计数字文本的有效数字位数
pub fn count_significant_digits(text: &str) -> usize {
    let Some(digits) = mantissa_digits(text.trim()) else {
        return 0;
    };
    match digits.trim_start_matches('0').len() {
        0 => 1,
        n => n,
    }
}

/// 解析为有限实数，否则返回 `None`
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    mantissa_digits(text)?;
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 解析一次字段输入
pub fn parse_input(text: &str) -> ParsedInput {
    let text = text.trim();
    if text.is_empty() {
        return ParsedInput::Empty;
    }
    match parse_number(text) {
        Some(value) => ParsedInput::Number {
            value,
            significant_digits: count_significant_digits(text),
        },
        None => ParsedInput::Invalid,
    }
}
