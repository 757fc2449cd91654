//! # convert 命令实现
//!
//! 把一个数值换算到全部单位。
//!
//! ## 功能
//! - 通过 `Controller` 完成换算，输入的有效数字会自动提升输出精度
//! - 终端表格或 CSV 输出
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `utils/output.rs`, `utils/table.rs`

use crate::cli::convert::ConvertArgs;
use crate::utils::{output, table};

use econv::error::{EconvError, Result};
use econv::format::parse_number;
use econv::{Controller, Precision, Side, Unit};
use std::io;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs, precision: Precision) -> Result<()> {
    let controller = convert_value(&args.value, args.unit, precision)?;

    if args.csv {
        return write_csv(&controller, io::stdout());
    }

    output::print_header(&format!("{} {}", args.value.trim(), args.unit));
    if controller.precision() != precision {
        output::print_info(&format!(
            "Precision raised to {} significant digits to match the input",
            controller.precision()
        ));
    }
    println!("{}", table::field_table(&controller));

    Ok(())
}

/// 构造控制器并输入数值
pub fn convert_value(value: &str, unit: Unit, precision: Precision) -> Result<Controller> {
    if parse_number(value).is_none() {
        return Err(EconvError::InvalidNumber(value.to_string()));
    }

    let mut controller = Controller::new(precision);
    controller.on_field_edit(unit, Side::Single, value)?;
    Ok(controller)
}

/// 以 `unit,value` 两列写出 CSV
fn write_csv<W: io::Write>(controller: &Controller, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["unit", "value"])?;
    for unit in Unit::ALL {
        wtr.write_record([unit.key(), controller.field_text(unit, Side::Single)])?;
    }
    wtr.flush().map_err(|e| EconvError::FileWriteError {
        path: "<stdout>".to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_value() {
        let c = convert_value("1", Unit::Hartree, Precision::default()).unwrap();
        assert_eq!(c.field_text(Unit::Electronvolt, Side::Single), "27.211386246");
    }

    #[test]
    fn test_convert_rejects_garbage() {
        assert!(matches!(
            convert_value("1.2.3", Unit::Hartree, Precision::default()),
            Err(EconvError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_write_csv() {
        let c = convert_value("500", Unit::Nanometer, Precision::new(6)).unwrap();
        let mut buf = Vec::new();
        write_csv(&c, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("unit,value\n"));
        assert!(text.contains("cm-1,20000\n"));
        assert!(text.contains("nm,500\n"));
    }
}
