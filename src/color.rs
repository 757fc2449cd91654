//! # 波长 → 颜色
//!
//! 可见光谱的分段线性近似 (380–780 nm)，两端按人眼灵敏度衰减，
//! 再做 γ = 0.8 校正。可见范围之外没有颜色。
//!
//! ## 依赖关系
//! - 被 `controller/sync.rs` (色块) 和 `commands/swatch.rs` 使用

use serde::Serialize;

const VISIBLE_MIN_NM: f64 = 380.0;
const VISIBLE_MAX_NM: f64 = 780.0;
const GAMMA: f64 = 0.8;

/// 8 位 RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#rrggbb`，即复制到剪贴板的文本
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// 波长 (nm) 对应的近似颜色；不可见或非有限时返回 `None`
pub fn wavelength_to_rgb(nm: f64) -> Option<Rgb> {
    if !nm.is_finite() || !(VISIBLE_MIN_NM..=VISIBLE_MAX_NM).contains(&nm) {
        return None;
    }

    let (r, g, b) = match nm {
        w if w < 440.0 => (-(w - 440.0) / (440.0 - 380.0), 0.0, 1.0),
        w if w < 490.0 => (0.0, (w - 440.0) / (490.0 - 440.0), 1.0),
        w if w < 510.0 => (0.0, 1.0, -(w - 510.0) / (510.0 - 490.0)),
        w if w < 580.0 => ((w - 510.0) / (580.0 - 510.0), 1.0, 0.0),
        w if w < 645.0 => (1.0, -(w - 645.0) / (645.0 - 580.0), 0.0),
        _ => (1.0, 0.0, 0.0),
    };

    // 视觉边缘衰减
    let factor = match nm {
        w if w < 420.0 => 0.3 + 0.7 * (w - 380.0) / (420.0 - 380.0),
        w if w <= 700.0 => 1.0,
        w => 0.3 + 0.7 * (780.0 - w) / (780.0 - 700.0),
    };

    Some(Rgb {
        r: channel(r, factor),
        g: channel(g, factor),
        b: channel(b, factor),
    })
}

fn channel(intensity: f64, factor: f64) -> u8 {
    if intensity <= 0.0 {
        return 0;
    }
    (255.0 * (intensity * factor).powf(GAMMA)).round().clamp(0.0, 255.0) as u8
}
