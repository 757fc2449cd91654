//! # 工具函数模块
//!
//! 提供美化输出、结果表格、进度条和剪贴板等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, table, progress, clipboard

pub mod clipboard;
pub mod output;
pub mod progress;
pub mod table;
