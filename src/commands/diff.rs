//! # diff 命令实现
//!
//! 换算两个数值并给出差值 A − B。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `utils/output.rs`, `utils/table.rs`

use crate::cli::convert::DiffArgs;
use crate::utils::{output, table};

use econv::error::{EconvError, Result};
use econv::format::parse_number;
use econv::{Controller, Precision, Side, Unit};

/// 执行 diff 命令
pub fn execute(args: DiffArgs, precision: Precision) -> Result<()> {
    let controller = diff_values(&args.a, &args.b, args.unit, precision)?;

    output::print_header(&format!(
        "({}) − ({}) {}",
        args.a.trim(),
        args.b.trim(),
        args.unit
    ));
    println!("{}", table::field_table(&controller));

    Ok(())
}

/// 进入差值模式并依次输入 A、B
pub fn diff_values(a: &str, b: &str, unit: Unit, precision: Precision) -> Result<Controller> {
    for value in [a, b] {
        if parse_number(value).is_none() {
            return Err(EconvError::InvalidNumber(value.to_string()));
        }
    }

    let mut controller = Controller::new(precision);
    controller.on_mode_toggle();
    controller.on_field_edit(unit, Side::B, b)?;
    controller.on_field_edit(unit, Side::A, a)?;
    Ok(controller)
}
