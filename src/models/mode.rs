//! # 工作模式与字段位置
//!
//! - `Mode`: 单值模式 / 差值（成对）模式
//! - `Side`: 字段所属的一侧（单值、A、B、差值 D）
//!
//! ## 依赖关系
//! - 被 `controller/` 和 `commands/session.rs` 使用

use serde::{Deserialize, Serialize};

/// 控制器工作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// 单个量
    #[default]
    Single,
    /// 两个量 A、B 及其差值 D = A − B
    Pair,
}

impl Mode {
    /// 切换到另一个模式
    pub fn toggled(self) -> Self {
        match self {
            Mode::Single => Mode::Pair,
            Mode::Pair => Mode::Single,
        }
    }

    /// 该模式下显示的字段侧
    pub fn sides(self) -> &'static [Side] {
        match self {
            Mode::Single => &[Side::Single],
            Mode::Pair => &[Side::A, Side::B, Side::D],
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Pair => write!(f, "pair"),
        }
    }
}

/// 字段所在的一侧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Single,
    A,
    B,
    /// 派生的差值，不可编辑
    D,
}

impl Side {
    /// 所属模式
    pub fn mode(self) -> Mode {
        match self {
            Side::Single => Mode::Single,
            Side::A | Side::B | Side::D => Mode::Pair,
        }
    }

    /// 用户是否可以直接编辑
    pub fn is_editable(self) -> bool {
        !matches!(self, Side::D)
    }

    /// 成对模式中的另一侧
    pub fn other(self) -> Option<Side> {
        match self {
            Side::A => Some(Side::B),
            Side::B => Some(Side::A),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Single => write!(f, "value"),
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
            Side::D => write!(f, "Δ"),
        }
    }
}
