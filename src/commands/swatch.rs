//! # swatch 命令实现
//!
//! 把一个能量（或波长）对应的可见光颜色显示在终端，可选保存为图片或复制十六进制色值。
//!
//! ## 依赖关系
//! - 使用 `cli/swatch.rs` 定义的参数
//! - 使用 `color.rs` 计算颜色
//! - 使用 `plotters` 输出 PNG / SVG

use crate::cli::swatch::SwatchArgs;
use crate::utils::clipboard::Copier;
use crate::utils::output;

use econv::color::{wavelength_to_rgb, Rgb};
use econv::conversion::convert;
use econv::error::{EconvError, Result};
use econv::format::{format_display, parse_input, ParsedInput};
use econv::{Precision, Unit};
use plotters::prelude::*;
use std::path::Path;

/// 执行 swatch 命令
pub fn execute(args: SwatchArgs, precision: Precision) -> Result<()> {
    let nm = wavelength_of(&args.value, args.unit)?;
    let digits = precision.digits();

    output::print_header(&format!("λ = {} nm", format_display(nm, digits)));

    let Some(rgb) = wavelength_to_rgb(nm) else {
        output::print_warning("Wavelength is outside the visible range (380-780 nm)");
        return Ok(());
    };

    println!("  {}  {}", output::swatch_block(rgb), rgb.hex());

    if let Some(path) = &args.output {
        render_swatch(rgb, path, args.size)?;
        output::print_success(&format!("Swatch saved to {}", path.display()));
    }

    if args.copy {
        match Copier::new().copy(&rgb.hex()) {
            Some(ack) => output::print_success(&format!("Copied '{}' to {}", ack.text, ack.method)),
            None => output::print_warning("Clipboard unavailable"),
        }
    }

    Ok(())
}

/// 输入换算为波长 (nm)；非数字或没有对应波长时报错
pub fn wavelength_of(text: &str, unit: Unit) -> Result<f64> {
    let ParsedInput::Number { value, .. } = parse_input(text) else {
        return Err(EconvError::InvalidNumber(text.to_string()));
    };
    let nm = convert(value, unit, Unit::Nanometer);
    if !nm.is_finite() || nm <= 0.0 {
        return Err(EconvError::InvalidArgument(format!(
            "{} {} has no wavelength",
            text.trim(),
            unit
        )));
    }
    Ok(nm)
}

/// 纯色方块；扩展名为 `.svg` 时输出 SVG，否则 PNG
pub fn render_swatch(rgb: Rgb, path: &Path, size: u32) -> Result<()> {
    let size = size.max(1);
    let use_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if use_svg {
        let root = SVGBackend::new(path, (size, size)).into_drawing_area();
        fill_swatch(&root, rgb)?;
        root.present()
            .map_err(|e| EconvError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(path, (size, size)).into_drawing_area();
        fill_swatch(&root, rgb)?;
        root.present()
            .map_err(|e| EconvError::PlotError(e.to_string()))?;
    }
    Ok(())
}

fn fill_swatch<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    rgb: Rgb,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&RGBColor(rgb.r, rgb.g, rgb.b))
        .map_err(|e| EconvError::PlotError(format!("{:?}", e)))
}
