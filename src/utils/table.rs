//! # 结果表格
//!
//! 把控制器当前的字段渲染为终端表格（单值模式一列，差值模式 A/B/Δ 三列）。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/diff.rs`, `commands/session.rs` 使用
//! - 使用 `tabled` crate

use econv::{Controller, Mode, Side, Unit};
use tabled::{Table, Tabled};

/// 单值模式的表格行
#[derive(Debug, Clone, Tabled)]
struct SingleRow {
    #[tabled(rename = "Unit")]
    unit: &'static str,
    #[tabled(rename = "Quantity")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 差值模式的表格行
#[derive(Debug, Clone, Tabled)]
struct PairRow {
    #[tabled(rename = "Unit")]
    unit: &'static str,
    #[tabled(rename = "A")]
    a: String,
    #[tabled(rename = "B")]
    b: String,
    #[tabled(rename = "Δ (A − B)")]
    d: String,
}

/// 按当前模式渲染全部字段
pub fn field_table(controller: &Controller) -> String {
    match controller.mode() {
        Mode::Single => {
            let rows: Vec<SingleRow> = Unit::ALL
                .iter()
                .map(|&unit| SingleRow {
                    unit: unit.symbol(),
                    label: unit.label(),
                    value: controller.get_display_value(unit, Side::Single),
                })
                .collect();
            Table::new(&rows).to_string()
        }
        Mode::Pair => {
            let rows: Vec<PairRow> = Unit::ALL
                .iter()
                .map(|&unit| PairRow {
                    unit: unit.symbol(),
                    a: controller.get_display_value(unit, Side::A),
                    b: controller.get_display_value(unit, Side::B),
                    d: controller.get_display_value(unit, Side::D),
                })
                .collect();
            Table::new(&rows).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_table_lists_every_unit() {
        let table = field_table(&Controller::default());
        for unit in Unit::ALL {
            assert!(table.contains(unit.symbol()), "missing {}", unit);
        }
        assert!(table.contains("27.211386246"));
    }

    #[test]
    fn test_pair_table_has_difference_column() {
        let mut controller = Controller::default();
        controller.on_mode_toggle();
        let table = field_table(&controller);
        assert!(table.contains("Δ (A − B)"));
        assert!(table.contains("45.563352529"));
    }
}
