//! # 数值格式化模块
//!
//! - 按有效数字位数渲染数值（显示用 / 编辑框用两种风格）
//! - 从用户输入推断有效数字位数并解析数值
//!
//! ## 依赖关系
//! - 被 `controller/` 和 `commands/` 使用
//! - 子模块: number, sigfig

pub mod number;
pub mod sigfig;

pub use number::{format_display, format_edit, format_value, Style, NO_VALUE};
pub use sigfig::{count_significant_digits, parse_input, parse_number, ParsedInput};
