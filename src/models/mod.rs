//! # 数据模型模块
//!
//! 定义能量单位、工作模式和字段位置。
//!
//! ## 依赖关系
//! - 被 `conversion/`, `controller/` 和 `commands/` 使用
//! - 子模块: unit, mode

pub mod mode;
pub mod unit;

pub use mode::{Mode, Side};
pub use unit::Unit;
