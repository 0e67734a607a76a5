//! # plot 命令实现
//!
//! 绘制给定角度下选中失效模式的利用率-荷载曲线。
//!
//! ## 功能
//! - 输出图像 (PNG/SVG)
//! - 导出数据文件 (CSV/XY)
//! - 输出格式默认由文件扩展名推断
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `joint/` 进行计算
//! - 使用 `chart/` 构建、渲染与导出图表

use super::{build_loads, build_selection, reference_calculator};
use crate::chart::{self, CurveSelection, UtilizationChart};
use crate::cli::plot::{ChartFormat, PlotArgs};
use crate::error::Result;
use crate::utils::output;

use std::path::Path;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Utilization Chart");

    let angle = f64::from(args.loads.angle);
    let loads = build_loads(&args.loads, &[])?;
    let selection = build_selection(&args.modes, CurveSelection::default())?;

    if selection.is_empty() {
        output::print_warning("No failure mode selected; the chart will contain no curves");
    }

    output::print_info(&format!("Angle α = {}°", angle));
    output::print_info(&format!(
        "Load range: {:.1} - {:.1} kN ({} points)",
        loads.values().first().copied().unwrap_or_default(),
        loads.values().last().copied().unwrap_or_default(),
        loads.len()
    ));
    for mode in selection.modes() {
        output::print_info(&format!("{}: {}", mode, chart::style::label(*mode)));
    }

    let result = reference_calculator()?.evaluate(&loads, angle)?;

    let mut utilization_chart = UtilizationChart::build(&result, &selection);
    if let Some(title) = &args.title {
        utilization_chart = utilization_chart.with_title(title.clone());
    }

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        ChartFormat::Png | ChartFormat::Svg => chart::plot::generate_chart(
            &utilization_chart,
            &args.output,
            args.width,
            args.height,
            format == ChartFormat::Svg,
        )?,
        ChartFormat::Csv => chart::export::chart_to_csv(&utilization_chart, &args.output)?,
        ChartFormat::Xy => chart::export::chart_to_xy(&utilization_chart, &args.output)?,
    }

    output::print_success(&format!(
        "Chart ({}) saved to '{}'",
        format,
        args.output.display()
    ));
    output::print_note(chart::CAPTION_NOTE);

    Ok(())
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ChartFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => ChartFormat::Svg,
        Some("csv") => ChartFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => ChartFormat::Xy,
        _ => ChartFormat::Png,
    }
}
