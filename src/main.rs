//! # Zapfen - 木结构榫接节点利用率分析工具
//!
//! 计算主次梁榫接节点在不同夹角与荷载下五种失效模式的利用率，
//! 输出表格、曲线图或数据文件。
//!
//! ## 子命令
//! - `evaluate` - 利用率表格与汇总
//! - `plot`     - 利用率-荷载曲线 (PNG/SVG/CSV/XY)
//! - `params`   - 节点材料与几何参数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── joint/     (节点参数与利用率计算)
//!   │     ├── chart/     (图表构建、渲染与导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod chart;
mod cli;
mod commands;
mod error;
mod joint;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
