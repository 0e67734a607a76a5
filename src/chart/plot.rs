//! # 利用率图表渲染
//!
//! 使用 `plotters` 库绘制利用率-荷载曲线。
//!
//! ## 功能
//! - 每种选中的失效模式一条曲线，颜色与标签固定
//! - 纵轴 0-150 %，100 % 处画出限值线
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `chart/mod.rs` 的 UtilizationChart
//! - 使用 `plotters` 渲染图表

use crate::chart::{UtilizationChart, X_DESC, Y_DESC};
use crate::error::{Result, ZapfenError};

use plotters::prelude::*;
use std::path::Path;

/// 生成利用率图表
pub fn generate_chart(
    chart: &UtilizationChart,
    output_path: &Path,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, chart)?;
        root.present()
            .map_err(|e| ZapfenError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, chart)?;
        root.present()
            .map_err(|e| ZapfenError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    chart: &UtilizationChart,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| ZapfenError::PlotError(format!("{:?}", e)))?;

    let (x_min, x_max) = chart.x_range;
    let (y_min, y_max) = chart.y_range;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ZapfenError::PlotError(format!("{:?}", e)))?;

    ctx.configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ZapfenError::PlotError(format!("{:?}", e)))?;

    // 100 % 限值线
    let limit_color = RGBColor(120, 120, 120);
    ctx.draw_series(std::iter::once(PathElement::new(
        vec![(x_min, 100.0), (x_max, 100.0)],
        limit_color.stroke_width(1),
    )))
    .map_err(|e| ZapfenError::PlotError(format!("{:?}", e)))?;

    for series in &chart.series {
        let color = series.color;
        ctx.draw_series(LineSeries::new(
            series.points.iter().copied(),
            color.stroke_width(2),
        ))
        .map_err(|e| ZapfenError::PlotError(format!("{:?}", e)))?
        .label(series.label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !chart.series.is_empty() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(("sans-serif", 14))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| ZapfenError::PlotError(format!("{:?}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::CurveSelection;
    use crate::joint::UtilizationCalculator;
    use crate::models::{FailureMode, LoadSeries};

    #[test]
    fn test_svg_chart() {
        let result = UtilizationCalculator::default()
            .evaluate(&LoadSeries::default(), 45.0)
            .unwrap();
        let selection = CurveSelection::new([FailureMode::TorsionZx, FailureMode::DruckGrund]);
        let chart = UtilizationChart::build(&result, &selection);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        generate_chart(&chart, &path, 800, 600, true).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Kraft Nd [kN]"));
        assert!(svg.contains("Schub aus Torsion in ZX-Richtung"));
        // 每条曲线一条折线，另有 100 % 限值线
        assert!(svg.matches("<polyline").count() >= chart.series.len() + 1);
    }
}
