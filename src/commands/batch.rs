//! # batch 命令实现
//!
//! 读取 CSV 的一列数值，并行换算到全部单位，写出新的 CSV。
//!
//! ## 功能
//! - 每行的输出精度取 max(全局精度, 该行输入的有效数字)
//! - 空单元格跳过，无法解析的行记录为失败并汇总报告
//! - 输出列：`input,input_unit,hartree,ev,kcal_per_mol,kj_per_mol,cm-1,kelvin,mhz,nm`
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/runner.rs` 并行执行
//! - 使用 `csv` 读写文件

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::utils::output;

use econv::conversion::{from_canonical, to_canonical};
use econv::error::{EconvError, Result};
use econv::format::{format_edit, parse_input, ParsedInput};
use econv::{Precision, Unit};
use serde::Serialize;
use std::path::Path;

/// 输出 CSV 的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedRow {
    pub input: String,
    pub input_unit: String,
    pub hartree: String,
    pub ev: String,
    pub kcal_per_mol: String,
    pub kj_per_mol: String,
    #[serde(rename = "cm-1")]
    pub wavenumber: String,
    pub kelvin: String,
    pub mhz: String,
    pub nm: String,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs, precision: Precision) -> Result<()> {
    output::print_header("Batch Conversion");

    if !args.input.exists() {
        return Err(EconvError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }
    if args.output.exists() && !args.overwrite {
        return Err(EconvError::InvalidArgument(format!(
            "{} already exists (use --overwrite to replace it)",
            args.output.display()
        )));
    }

    let cells = read_column(&args.input, &args.column)?;
    if cells.is_empty() {
        output::print_warning("No rows to convert.");
        return Ok(());
    }

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Converting {} values from {} ({} jobs)...",
        cells.len(),
        args.unit,
        runner.jobs()
    ));
    log::debug!("column '{}' of {}", args.column, args.input.display());

    let unit = args.unit;
    let result = runner.run(&cells, |(line, text)| {
        convert_row(*line, text, unit, precision)
    })?;

    write_rows(&result.outputs, &args.output)?;

    for (line, err) in &result.failures {
        output::print_warning(&format!("line {}: {}", line, err));
    }
    if result.skipped > 0 {
        output::print_info(&format!("Skipped {} empty cells", result.skipped));
    }
    output::print_done(&format!(
        "Converted {}/{} values -> {}",
        result.outputs.len(),
        result.total(),
        args.output.display()
    ));

    Ok(())
}

/// 读取指定列，返回 (行号, 原始文本)
pub fn read_column(path: &Path, column: &str) -> Result<Vec<(usize, String)>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let index = rdr
        .headers()?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| EconvError::ColumnNotFound {
            column: column.to_string(),
            path: path.display().to_string(),
        })?;

    let mut cells = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record.position().map_or(i + 2, |p| p.line() as usize);
        cells.push((line, record.get(index).unwrap_or("").to_string()));
    }
    Ok(cells)
}

/// 换算一个单元格
pub fn convert_row(
    line: usize,
    text: &str,
    unit: Unit,
    precision: Precision,
) -> ProcessResult<ConvertedRow> {
    let (value, significant_digits) = match parse_input(text) {
        ParsedInput::Empty => return ProcessResult::Skipped(line),
        ParsedInput::Invalid => {
            return ProcessResult::Failed(line, format!("'{}' is not a number", text.trim()))
        }
        ParsedInput::Number {
            value,
            significant_digits,
        } => (value, significant_digits),
    };

    let canonical = to_canonical(value, unit);
    if !canonical.is_finite() {
        return ProcessResult::Failed(
            line,
            format!("{} {} has no equivalent energy", text.trim(), unit),
        );
    }

    let digits = precision
        .raised_to(significant_digits)
        .unwrap_or(precision)
        .digits();
    let values = from_canonical(canonical);
    let cell = |u: Unit| format_edit(values[u], digits);

    ProcessResult::Success(ConvertedRow {
        input: text.trim().to_string(),
        input_unit: unit.key().to_string(),
        hartree: cell(Unit::Hartree),
        ev: cell(Unit::Electronvolt),
        kcal_per_mol: cell(Unit::KcalPerMol),
        kj_per_mol: cell(Unit::KjPerMol),
        wavenumber: cell(Unit::Wavenumber),
        kelvin: cell(Unit::Kelvin),
        mhz: cell(Unit::Megahertz),
        nm: cell(Unit::Nanometer),
    })
}

/// 写出结果 CSV
fn write_rows(rows: &[ConvertedRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| EconvError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
