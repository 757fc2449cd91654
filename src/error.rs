//! # 统一错误处理模块
//!
//! 定义 econv 的所有错误类型，使用 `thiserror` 派生。
//!
//! 注意：用户输入层面的问题（无法解析的数字、空输入）不是错误，
//! 控制器会直接忽略或清空；只有调用方违反契约（如编辑被禁用的字段）
//! 以及 I/O 失败才会返回 `Err`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `models/` 中的 `Unit`, `Side`, `Mode`

use crate::models::{Mode, Side, Unit};
use thiserror::Error;

/// econv 统一错误类型
#[derive(Error, Debug)]
pub enum EconvError {
    // ─────────────────────────────────────────────────────────────
    // 控制器契约错误
    // ─────────────────────────────────────────────────────────────
    #[error("Field {unit} ({side}) is disabled in {mode} mode")]
    FieldDisabled { unit: Unit, side: Side, mode: Mode },

    #[error("Field {unit} ({side}) is derived and cannot be edited")]
    FieldNotEditable { unit: Unit, side: Side },

    #[error("Side '{side}' does not belong to {mode} mode")]
    ModeMismatch { side: Side, mode: Mode },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown unit: '{0}' (expected one of: hartree, ev, kcal_per_mol, kj_per_mol, cm-1, kelvin, mhz, nm)")]
    UnknownUnit(String),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Unknown side: '{0}' (expected 'a' or 'b')")]
    UnknownSide(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // CSV / 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Column '{column}' not found in {path}")]
    ColumnNotFound { column: String, path: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to render swatch: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EconvError>;
