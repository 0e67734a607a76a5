//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `evaluate`: 计算利用率并打印表格
//! - `plot`: 绘制利用率-荷载曲线或导出数据
//! - `params`: 打印节点参数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: evaluate, plot

pub mod evaluate;
pub mod plot;

use clap::{Args, Parser, Subcommand};

/// zapfen - 木结构榫接节点利用率分析工具
#[derive(Parser)]
#[command(name = "zapfen")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Utilization analysis and comparison charts for timber tenon joints", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate utilization ratios and print them as a table
    Evaluate(evaluate::EvaluateArgs),

    /// Plot utilization against load for the selected failure modes
    Plot(plot::PlotArgs),

    /// Show the joint's material and geometry parameters
    Params,
}

// ─────────────────────────────────────────────────────────────
// 共用参数
// ─────────────────────────────────────────────────────────────

/// 角度与荷载序列参数
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Joint angle α in degrees (1-90)
    #[arg(
        short,
        long,
        env = "ZAPFEN_ANGLE",
        default_value_t = 45,
        value_parser = clap::value_parser!(u8).range(1..=90)
    )]
    pub angle: u8,

    /// Load range Nd in kN (e.g., "0-20")
    #[arg(short, long, env = "ZAPFEN_LOAD_RANGE", default_value = "0-20")]
    pub range: String,

    /// Load step in kN
    #[arg(long, env = "ZAPFEN_LOAD_STEP", default_value_t = 0.1)]
    pub step: f64,
}

/// 失效模式选择参数
#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
    /// Failure modes to include, comma separated (Torsion_Zx, Torsion_Zy, Druck_Stirn, Druck_Grund, Schub_Vorholz)
    #[arg(short, long, value_delimiter = ',')]
    pub modes: Vec<String>,

    /// Include all five failure modes
    #[arg(long, default_value_t = false, conflicts_with = "modes")]
    pub all: bool,
}
