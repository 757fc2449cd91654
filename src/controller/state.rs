//! # 控制器状态
//!
//! - `ControllerState`: 模式、精度、规范数值（唯一的真值来源）
//! - `Fields`: 每个 (单位, 侧) 字段当前显示的文本
//! - `FieldChange` / `Update`: 一次提交产生的变更通知
//!
//! ## 依赖关系
//! - 被 `controller/sync.rs` 使用
//! - 使用 `models/`, `controller/precision.rs`

use super::Precision;
use crate::models::{Mode, Side, Unit};

use serde::Serialize;
use std::collections::BTreeMap;

/// 差值模式的两个量；离开差值模式后仍保留
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PairState {
    pub a: Option<f64>,
    pub b: Option<f64>,
}

impl PairState {
    /// 派生差值 D = A − B，任一侧无值时为 `None`
    pub fn difference(&self) -> Option<f64> {
        Some(self.a? - self.b?)
    }
}

/// 控制器的全部逻辑状态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerState {
    pub mode: Mode,
    pub precision: Precision,
    /// 单值模式的规范数值 (Hartree)
    pub single: Option<f64>,
    pub pair: PairState,
    /// 每一侧最近一次由用户键入的单位
    pub authored: BTreeMap<Side, Unit>,
}

impl ControllerState {
    pub fn new(precision: Precision) -> Self {
        ControllerState {
            mode: Mode::Single,
            precision,
            single: None,
            pair: PairState::default(),
            authored: BTreeMap::new(),
        }
    }

    /// 某一侧的规范数值
    pub fn value(&self, side: Side) -> Option<f64> {
        match side {
            Side::Single => self.single,
            Side::A => self.pair.a,
            Side::B => self.pair.b,
            Side::D => self.pair.difference(),
        }
    }

    /// 设置可编辑侧的规范数值；D 是派生量，忽略
    pub fn set_value(&mut self, side: Side, value: Option<f64>) {
        match side {
            Side::Single => self.single = value,
            Side::A => self.pair.a = value,
            Side::B => self.pair.b = value,
            Side::D => {}
        }
    }
}

/// 单个字段的变更请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub unit: Unit,
    pub side: Side,
    pub text: String,
}

/// 一次事件处理的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update {
    /// 需要渲染层写入的字段（不含正在编辑的字段）
    pub changes: Vec<FieldChange>,
    /// 处理后的精度
    pub precision: Precision,
    /// 精度是否被输入自动提升
    pub precision_raised: bool,
    /// 输入是否被接受；无法解析的输入为 `false`，即使接受后没有字段变化也为 `true`
    pub accepted: bool,
}

impl Update {
    /// 输入被忽略，没有任何变化
    pub fn unchanged(precision: Precision) -> Self {
        Update {
            changes: Vec::new(),
            precision,
            precision_raised: false,
            accepted: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && !self.precision_raised
    }

    /// 查找某个字段的新文本
    pub fn change_for(&self, unit: Unit, side: Side) -> Option<&str> {
        self.changes
            .iter()
            .find(|c| c.unit == unit && c.side == side)
            .map(|c| c.text.as_str())
    }
}

/// 全部字段的文本
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<(Unit, Side), String>);

impl Fields {
    /// 字段文本；未写入过的字段为空串
    pub fn text(&self, unit: Unit, side: Side) -> &str {
        self.0.get(&(unit, side)).map_or("", |s| s.as_str())
    }

    pub fn set(&mut self, unit: Unit, side: Side, text: impl Into<String>) {
        self.0.insert((unit, side), text.into());
    }

    /// 与目标比较，列出需要改写的字段（按单位、侧排序）
    pub fn diff(&self, target: &Fields) -> Vec<FieldChange> {
        target
            .0
            .iter()
            .filter(|((unit, side), text)| self.text(*unit, *side) != text.as_str())
            .map(|(&(unit, side), text)| FieldChange {
                unit,
                side,
                text: text.clone(),
            })
            .collect()
    }

    /// 应用变更
    pub fn apply(&mut self, changes: &[FieldChange]) {
        for change in changes {
            self.set(change.unit, change.side, change.text.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_difference() {
        let pair = PairState {
            a: Some(3.0),
            b: Some(1.25),
        };
        assert_eq!(pair.difference(), Some(1.75));
        assert_eq!(PairState { a: Some(1.0), b: None }.difference(), None);
    }

    #[test]
    fn test_fields_diff_only_reports_changes() {
        let mut current = Fields::default();
        current.set(Unit::Hartree, Side::Single, "1");
        current.set(Unit::Electronvolt, Side::Single, "27.2");

        let mut target = Fields::default();
        target.set(Unit::Hartree, Side::Single, "1");
        target.set(Unit::Electronvolt, Side::Single, "27.21");
        target.set(Unit::Kelvin, Side::Single, "");

        let changes = current.diff(&target);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].unit, Unit::Electronvolt);
        assert_eq!(changes[0].text, "27.21");

        current.apply(&changes);
        assert_eq!(current.text(Unit::Electronvolt, Side::Single), "27.21");
        assert!(current.diff(&target).is_empty());
    }
}
