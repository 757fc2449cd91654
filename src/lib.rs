//! # econv - 能量等价单位换算控件核心
//!
//! 在 Hartree、eV、kcal/mol、kJ/mol、cm⁻¹、K、MHz、nm 之间互相换算，
//! 支持单值模式和差值（A − B）模式，按有效数字格式化。
//!
//! 本 crate 不依赖任何 UI；渲染层（见 `econv` 可执行文件）只需调用
//! `Controller` 的事件入口，并把返回的字段变更写到界面上。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── models/      (单位、模式、字段位置)
//!   ├── conversion/  (换算引擎，无依赖)
//!   ├── format/      (有效数字格式化与输入解析)
//!   ├── controller/  (同步控制器，使用 conversion + format)
//!   ├── color.rs     (波长 → 颜色)
//!   └── error.rs     (错误处理)
//! ```

pub mod color;
pub mod controller;
pub mod conversion;
pub mod error;
pub mod format;
pub mod models;

pub use controller::{Controller, Precision, Update};
pub use error::{EconvError, Result};
pub use models::{Mode, Side, Unit};
