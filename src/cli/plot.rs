//! # plot 子命令 CLI 定义
//!
//! 绘制利用率-荷载曲线（PNG/SVG）或导出曲线数据（CSV/XY）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use super::{LoadArgs, ModeArgs};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图表输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ChartFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (load + one column per selected mode)
    Csv,
    /// XY data file (tab separated, commented header)
    Xy,
}

impl std::fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartFormat::Png => write!(f, "png"),
            ChartFormat::Svg => write!(f, "svg"),
            ChartFormat::Csv => write!(f, "csv"),
            ChartFormat::Xy => write!(f, "xy"),
        }
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub loads: LoadArgs,

    #[command(flatten)]
    pub modes: ModeArgs,

    /// Output file path
    #[arg(short, long, default_value = "ausnutzung.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ChartFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: "Ausnutzung bei α = <angle>°")
    #[arg(long)]
    pub title: Option<String>,
}
