//! # 精度设置
//!
//! 有效数字位数，限制在 [1, 30]。

use serde::{Deserialize, Serialize};

/// 有效数字位数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Precision(u8);

impl Precision {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;
    pub const DEFAULT: u8 = 11;

    /// 截断到合法范围
    pub fn new(digits: i64) -> Self {
        Precision(digits.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// 四舍五入后截断；非有限值返回 `None`
    pub fn from_f64(value: f64) -> Option<Self> {
        value
            .is_finite()
            .then(|| Self::new(value.round() as i64))
    }

    /// 解析精度输入框的文本
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().and_then(Self::from_f64)
    }

    pub fn digits(self) -> usize {
        self.0 as usize
    }

    /// 步进 ±n，结果仍在范围内
    pub fn step(self, delta: i32) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }

    /// 输入携带的有效数字多于当前设置时返回提升后的精度
    pub fn raised_to(self, digits: usize) -> Option<Self> {
        (digits > self.digits()).then(|| Self::new(digits.min(Self::MAX as usize) as i64))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(Self::DEFAULT)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(Precision::new(0).digits(), 1);
        assert_eq!(Precision::new(-5).digits(), 1);
        assert_eq!(Precision::new(31).digits(), 30);
        assert_eq!(Precision::new(12).digits(), 12);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Precision::parse("7.6"), Some(Precision::new(8)));
        assert_eq!(Precision::parse(" 100 "), Some(Precision::new(30)));
        assert_eq!(Precision::parse("1e308"), Some(Precision::new(30)));
        assert_eq!(Precision::parse("abc"), None);
        assert_eq!(Precision::parse("inf"), None);
    }

    #[test]
    fn test_step() {
        assert_eq!(Precision::new(30).step(1).digits(), 30);
        assert_eq!(Precision::new(1).step(-1).digits(), 1);
        assert_eq!(Precision::new(6).step(1).digits(), 7);
    }

    #[test]
    fn test_raised_to() {
        let p = Precision::new(6);
        assert_eq!(p.raised_to(9), Some(Precision::new(9)));
        assert_eq!(p.raised_to(6), None);
        assert_eq!(p.raised_to(3), None);
        assert_eq!(p.raised_to(45), Some(Precision::new(30)));
    }
}
