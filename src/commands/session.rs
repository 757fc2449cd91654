//! # session 命令实现
//!
//! 行驱动的交互式换算控件：每行一条指令，控制器处理后重绘表格。
//!
//! ## 指令
//! ```text
//! set <unit> [a|b] <value>   编辑字段
//! clear <unit> [a|b]         清空字段
//! prec <n> | prec + | prec - 设置 / 步进精度
//! mode                       切换单值 / 差值模式
//! copy <unit>                复制当前结果
//! swatch                     显示并复制波长颜色
//! show | help | quit
//! ```
//!
//! ## 依赖关系
//! - 使用 `cli/session.rs` 定义的参数
//! - 使用 `utils/output.rs`, `utils/table.rs`, `utils/clipboard.rs`

use crate::cli::session::SessionArgs;
use crate::utils::clipboard::{CopyAck, Copier};
use crate::utils::{output, table};

use colored::Colorize;
use econv::error::{EconvError, Result};
use econv::{Controller, Mode, Precision, Side, Unit, Update};
use std::io::{self, BufRead, Write};

/// 一条会话指令
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Set { unit: Unit, side: Side, text: String },
    Precision(String),
    Step(i32),
    Toggle,
    Copy(Unit),
    Swatch,
    Show,
    Help,
    Quit,
}

/// 执行 session 命令
pub fn execute(args: SessionArgs, precision: Precision) -> Result<()> {
    let mut controller = Controller::new(precision);
    if args.pair {
        controller.on_mode_toggle();
    }
    let mut copier = Copier::new();
    let mut ack: Option<CopyAck> = None;

    output::print_header("econv interactive session");
    output::print_info("Type 'help' for the list of commands");
    render(&controller, ack.as_ref());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt(&controller)?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.map_err(|e| EconvError::FileReadError {
            path: "<stdin>".to_string(),
            source: e,
        })?;

        let command = match parse_command(&line, controller.mode()) {
            Ok(command) => command,
            Err(e) => {
                output::print_warning(&e.to_string());
                continue;
            }
        };

        match command {
            SessionCommand::Set { unit, side, text } => {
                match controller.on_field_edit(unit, side, &text) {
                    Ok(update) => report_edit(&update, &text),
                    Err(e) => {
                        output::print_warning(&e.to_string());
                        continue;
                    }
                }
            }
            SessionCommand::Precision(text) => {
                if !controller.on_precision_edit(&text).accepted {
                    output::print_warning(&format!("Ignored precision '{}'", text));
                    continue;
                }
            }
            SessionCommand::Step(delta) => {
                controller.on_precision_step(delta);
            }
            SessionCommand::Toggle => {
                controller.on_mode_toggle();
            }
            SessionCommand::Copy(unit) => {
                match controller.get_copy_text(unit) {
                    Some(text) => ack = copy(&mut copier, &text),
                    None => output::print_warning(&format!("Nothing to copy for {}", unit)),
                }
            }
            SessionCommand::Swatch => match controller.swatch() {
                Some(rgb) => {
                    println!("  {}  {}", output::swatch_block(rgb), rgb.hex());
                    ack = copy(&mut copier, &rgb.hex());
                }
                None => output::print_warning("Current wavelength is outside the visible range"),
            },
            SessionCommand::Show => {}
            SessionCommand::Help => {
                print_help();
                continue;
            }
            SessionCommand::Quit => break,
        }

        render(&controller, ack.as_ref());
    }

    Ok(())
}

/// 解析一行会话指令
///
/// 省略侧时，单值模式指向单值字段，差值模式指向 A。
pub fn parse_command(line: &str, mode: Mode) -> Result<SessionCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(SessionCommand::Show);
    };

    let default_side = match mode {
        Mode::Single => Side::Single,
        Mode::Pair => Side::A,
    };

    match head.to_lowercase().as_str() {
        "set" | "s" => {
            let (unit, rest) = split_unit(rest)?;
            let (side, rest) = split_side(rest, default_side)?;
            match rest {
                [text] => Ok(SessionCommand::Set {
                    unit,
                    side,
                    text: text.to_string(),
                }),
                [] => Ok(SessionCommand::Set {
                    unit,
                    side,
                    text: String::new(),
                }),
                _ => Err(EconvError::InvalidArgument(
                    "usage: set <unit> [a|b] <value>".to_string(),
                )),
            }
        }
        "clear" | "c" => {
            let (unit, rest) = split_unit(rest)?;
            let (side, _) = split_side(rest, default_side)?;
            Ok(SessionCommand::Set {
                unit,
                side,
                text: String::new(),
            })
        }
        "prec" | "precision" | "p" => match rest {
            ["+"] => Ok(SessionCommand::Step(1)),
            ["-"] => Ok(SessionCommand::Step(-1)),
            [text] => Ok(SessionCommand::Precision(text.to_string())),
            _ => Err(EconvError::InvalidArgument(
                "usage: prec <n> | prec + | prec -".to_string(),
            )),
        },
        "mode" | "toggle" | "m" => Ok(SessionCommand::Toggle),
        "copy" | "y" => {
            let (unit, _) = split_unit(rest)?;
            Ok(SessionCommand::Copy(unit))
        }
        "swatch" | "color" | "colour" => Ok(SessionCommand::Swatch),
        "show" => Ok(SessionCommand::Show),
        "help" | "?" | "h" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        other => Err(EconvError::InvalidArgument(format!(
            "unknown command '{}' (type 'help')",
            other
        ))),
    }
}

fn split_unit<'a, 'b>(tokens: &'a [&'b str]) -> Result<(Unit, &'a [&'b str])> {
    match tokens.split_first() {
        Some((unit, rest)) => Ok((unit.parse()?, rest)),
        None => Err(EconvError::InvalidArgument("missing unit".to_string())),
    }
}

/// 可选的 `a` / `b`；只有在后面还跟着值或没有更多参数时才当作侧
fn split_side<'a, 'b>(tokens: &'a [&'b str], default: Side) -> Result<(Side, &'a [&'b str])> {
    match tokens.split_first() {
        Some((token, rest)) if token.eq_ignore_ascii_case("a") => Ok((Side::A, rest)),
        Some((token, rest)) if token.eq_ignore_ascii_case("b") => Ok((Side::B, rest)),
        Some((token, rest)) if rest.len() == 1 => Err(EconvError::UnknownSide(token.to_string())),
        _ => Ok((default, tokens)),
    }
}

fn prompt(controller: &Controller) -> Result<()> {
    print!(
        "{} ",
        format!("[{} p={}]>", controller.mode(), controller.precision()).cyan()
    );
    io::stdout()
        .flush()
        .map_err(|e| EconvError::FileWriteError {
            path: "<stdout>".to_string(),
            source: e,
        })
}

fn report_edit(update: &Update, text: &str) {
    if update.precision_raised {
        output::print_info(&format!(
            "Precision raised to {} significant digits",
            update.precision
        ));
    }
    if !update.accepted {
        output::print_warning(&format!("Ignored '{}': not a number", text));
    }
}

fn copy(copier: &mut Copier, text: &str) -> Option<CopyAck> {
    let ack = copier.copy(text);
    if ack.is_none() {
        output::print_warning("Clipboard unavailable");
    }
    ack
}

/// 重绘表格；复制确认只在有效期内显示
fn render(controller: &Controller, ack: Option<&CopyAck>) {
    println!("{}", table::field_table(controller));
    if let Some(ack) = ack.filter(|a| !a.is_expired()) {
        output::print_success(&format!("Copied '{}' to {}", ack.text, ack.method));
    }
}

fn print_help() {
    let units: Vec<&str> = Unit::ALL.iter().map(|u| u.key()).collect();
    println!("  set <unit> [a|b] <value>   edit a field (empty value clears it)");
    println!("  clear <unit> [a|b]         clear a field");
    println!("  prec <n> | prec + | prec - set or step the significant digits (1-30)");
    println!("  mode                       toggle single / pair (A − B) mode");
    println!("  copy <unit>                copy the current result for a unit");
    println!("  swatch                     show and copy the colour of the wavelength");
    println!("  show | help | quit");
    println!("  units: {}", units.join(", "));
}
