//! # 有效数字格式化
//!
//! ## 规则
//! - 非有限值：显示风格输出 `—`，编辑风格输出空串
//! - 舍入后 |v| ∈ [1e-6, 1e8) 或 v = 0：定点表示，恰好 `precision` 位有效数字，
//!   去掉小数部分末尾的 0 和孤立的小数点
//! - 其余：指数表示 `d.ddd…e±N`，恰好 `precision` 位有效数字，不裁剪
//!
//! 输出始终使用 `.` 作为小数点，不做千位分组，可直接回填到编辑框。
//!
//! ## 依赖关系
//! - 被 `controller/` 和 `commands/` 使用

/// 显示用的“无值”标记
pub const NO_VALUE: &str = "—";

/// 定点表示的最小十进制指数（含）
const FIXED_MIN_EXP: i32 = -6;
/// 定点表示的最大十进制指数（不含）
const FIXED_MAX_EXP: i32 = 8;

/// 输出风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// 给人看：非有限值显示为 `—`
    Display,
    /// 给编辑框：非有限值为空串，保证可回读
    Edit,
}

impl Style {
    fn no_value(self) -> &'static str {
        match self {
            Style::Display => NO_VALUE,
            Style::Edit => "",
        }
    }
}

/// 按 `precision` 位有效数字格式化
pub fn format_value(value: f64, precision: usize, style: Style) -> String {
    if !value.is_finite() {
        return style.no_value().to_string();
    }

    let digits = precision.max(1);
    if value == 0.0 {
        return to_positional(value, digits);
    }
    // 以舍入后的指数选择表示法，保证输出回读后仍落在同一侧
    let (_, exp) = round_scientific(value.abs(), digits);
    if (FIXED_MIN_EXP..FIXED_MAX_EXP).contains(&exp) {
        to_positional(value, digits)
    } else {
        to_exponential(value, digits)
    }
}

/// 显示风格的快捷方式
pub fn format_display(value: f64, precision: usize) -> String {
    format_value(value, precision, Style::Display)
}

/// 编辑风格的快捷方式
pub fn format_edit(value: f64, precision: usize) -> String {
    format_value(value, precision, Style::Edit)
}

/// 舍入到 `digits` 位有效数字，返回 (尾数字符串, 十进制指数)
///
/// 尾数形如 `2.7211386246`，只针对绝对值。
fn round_scientific(abs: f64, digits: usize) -> (String, i32) {
    let s = format!("{:.*e}", digits - 1, abs);
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn to_exponential(value: f64, digits: usize) -> String {
    let (mantissa, exp) = round_scientific(value.abs(), digits);
    let sign = if value < 0.0 { "-" } else { "" };
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}e{}{}", sign, mantissa, exp_sign, exp.abs())
}

fn to_positional(value: f64, digits: usize) -> String {
    let (mantissa, exp) = round_scientific(value.abs(), digits);
    let significand: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut out = String::with_capacity(significand.len() + 8);
    if exp >= 0 {
        let int_len = exp as usize + 1;
        if significand.len() <= int_len {
            out.push_str(&significand);
            out.extend(std::iter::repeat('0').take(int_len - significand.len()));
        } else {
            out.push_str(&significand[..int_len]);
            out.push('.');
            out.push_str(&significand[int_len..]);
        }
    } else {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-exp - 1) as usize));
        out.push_str(&significand);
    }

    let trimmed = strip_trailing_zeros(&out);
    if value < 0.0 && trimmed != "0" {
        format!("-{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_number;

    #[test]
    fn test_positional_significant_digits() {
        assert_eq!(format_edit(27.211386245981, 11), "27.211386246");
        assert_eq!(format_edit(27.211386245981, 10), "27.21138625");
        assert_eq!(format_edit(219474.63136314, 10), "219474.6314");
        assert_eq!(format_edit(0.000123456, 3), "0.000123");
        assert_eq!(format_edit(1234.5, 2), "1200");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_edit(1.0, 11), "1");
        assert_eq!(format_edit(2.5, 6), "2.5");
        assert_eq!(format_edit(0.1 + 0.2, 11), "0.3");
        assert_eq!(format_edit(99.96, 3), "100");
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(format_edit(0.0, 8), "0");
        assert_eq!(format_edit(-0.0, 8), "0");
        assert_eq!(format_edit(-0.5, 3), "-0.5");
        assert_eq!(format_edit(-1234.5678, 6), "-1234.57");
    }

    #[test]
    fn test_exponential_band() {
        assert_eq!(format_edit(1e-7, 3), "1.00e-7");
        assert_eq!(format_edit(1.23456e8, 4), "1.235e+8");
        assert_eq!(format_edit(-6.5796839204999e9, 5), "-6.5797e+9");
        // 下界包含在定点区间内
        assert_eq!(format_edit(1e-6, 3), "0.000001");
        // 舍入跨过边界时按舍入结果选择
        assert_eq!(format_edit(99_999_999.7, 3), "1.00e+8");
        assert_eq!(format_edit(9.999_999_7e-7, 3), "0.000001");
        assert_eq!(format_edit(99_999_999.7, 11), "99999999.7");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_display(f64::NAN, 6), NO_VALUE);
        assert_eq!(format_display(f64::INFINITY, 6), NO_VALUE);
        assert_eq!(format_edit(f64::NEG_INFINITY, 6), "");
    }

    #[test]
    fn test_precision_zero_treated_as_one() {
        assert_eq!(format_edit(27.2, 0), "30");
    }

    #[test]
    fn test_formatting_idempotent_in_band() {
        for &v in &[
            27.211386245981,
            0.0036749322,
            627.50947406,
            45.5633525,
            1.0e7 + 0.123,
            99_999_999.7,
            9.999_999_7e-7,
        ] {
            for p in [1, 3, 6, 11, 15] {
                let once = format_edit(v, p);
                let again = format_edit(parse_number(&once).unwrap(), p);
                assert_eq!(once, again, "value {v} at precision {p}");
            }
        }
    }

    #[test]
    fn test_high_precision() {
        let s = format_edit(1.0 / 3.0, 30);
        assert!(s.starts_with("0.333333333333333"));
        assert_eq!(s.len(), 32);
    }
}
