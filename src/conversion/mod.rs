//! # 单位换算引擎
//!
//! 以 Hartree 为规范单位的双向换算：任意单位 → Hartree → 全部单位。
//! 全部为纯函数，不持有可变状态，可在多线程中直接调用。
//!
//! ## 依赖关系
//! - 被 `controller/` 和 `commands/batch.rs` 使用
//! - 使用 `models/unit.rs`
//! - 子模块: constants, engine

pub mod constants;
pub mod engine;

pub use engine::{convert, from_canonical, to_canonical, UnitValues};
