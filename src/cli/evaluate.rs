//! # evaluate 子命令 CLI 定义
//!
//! 计算利用率并以表格形式输出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/evaluate.rs`

use super::{LoadArgs, ModeArgs};
use clap::Args;
use std::path::PathBuf;

/// evaluate 子命令参数
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub loads: LoadArgs,

    #[command(flatten)]
    pub modes: ModeArgs,

    /// Explicit load values in kN (overrides --range/--step), e.g. "--load 5 --load 10"
    #[arg(short, long = "load")]
    pub load: Vec<f64>,

    /// Maximum number of table rows to print (evenly sampled over the load series)
    #[arg(long, default_value_t = 21)]
    pub rows: usize,

    /// Write the full utilization table to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
