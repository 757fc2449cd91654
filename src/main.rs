//! # econv - 能量等价单位换算工具
//!
//! `econv` 库的终端前端：所有换算、格式化与字段同步都由库完成，
//! 这里只负责参数解析、终端渲染、剪贴板和文件输出。
//!
//! ## 子命令
//! - `convert` - 单个数值换算到全部单位
//! - `diff`    - 两个数值的差值（A − B）
//! - `session` - 交互式换算控件
//! - `batch`   - 批量换算 CSV 中的一列
//! - `swatch`  - 波长对应的颜色
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑，调用 econv 库)
//!   ├── batch/      (并行批处理)
//!   └── utils/      (输出、表格、进度条、剪贴板)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;
use env_logger::Env;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 默认只输出警告，--verbose 打开 debug，RUST_LOG 可覆盖
    let env = if cli.verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    if let Err(e) = commands::run(cli.command, cli.precision) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
