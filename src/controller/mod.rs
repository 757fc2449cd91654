//! # 同步控制器模块
//!
//! 持有规范数值（单值模式一个，差值模式 A、B 两个）与精度设置，
//! 把任一字段的编辑同步到其余全部字段。
//!
//! ## 更新流程
//! ```text
//! 输入事件 → 解析 (format::parse_input)
//!          → 换算到 Hartree (conversion::to_canonical)
//!          → 计算目标字段全集 (conversion::from_canonical + format::format_edit)
//!          → 与当前字段比对，一次性提交，返回变更列表
//! ```
//! 先算出全部目标值再提交，不会出现“写字段触发新编辑”的重入，
//! 解析失败时也不会有任何字段被部分改写。
//!
//! ## 依赖关系
//! - 使用 `conversion/`, `format/`, `models/`, `color.rs`
//! - 被 `commands/` 使用
//! - 子模块: precision, state, sync

pub mod precision;
pub mod state;
pub mod sync;

pub use precision::Precision;
pub use state::{ControllerState, FieldChange, Fields, PairState, Update};
pub use sync::Controller;
