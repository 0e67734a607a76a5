//! # 利用率图表模块
//!
//! 展示层：选择曲线、分配标签与颜色、生成图表并导出数据。
//! 只消费计算器输出的 `UtilizationResult`，不参与计算。
//!
//! ## 子模块
//! - `style`: 失效模式的标签与颜色
//! - `plot`: 图表渲染（PNG/SVG）
//! - `export`: 数据导出（CSV/XY）
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/evaluate.rs` 使用
//! - 使用 `models/result.rs` 的 UtilizationResult

pub mod export;
pub mod plot;
pub mod style;

use crate::error::Result;
use crate::models::{FailureMode, UtilizationResult};

use plotters::style::RGBColor;

/// 纵轴范围（%）
pub const Y_RANGE: (f64, f64) = (0.0, 150.0);
/// 横轴说明
pub const X_DESC: &str = "Kraft Nd [kN]";
/// 纵轴说明
pub const Y_DESC: &str = "Ausnutzung [%]";
/// 图表下方的说明文字
pub const CAPTION_NOTE: &str =
    "Die Kurven zeigen die Ausnutzung der gewählten Nachweise in Abhängigkeit von Nd und dem α-Winkel.";

/// 选中的曲线（保持用户给定的顺序，去重）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveSelection {
    modes: Vec<FailureMode>,
}

impl CurveSelection {
    pub fn new(modes: impl IntoIterator<Item = FailureMode>) -> Self {
        let mut selected = Vec::new();
        for mode in modes {
            if !selected.contains(&mode) {
                selected.push(mode);
            }
        }
        Self { modes: selected }
    }

    /// 全部五条曲线
    pub fn all() -> Self {
        Self::new(FailureMode::ALL)
    }

    /// 由名称列表解析（如 `Torsion_Zx`, `druck-stirn`）
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let modes = names
            .iter()
            .map(|name| name.as_ref().parse::<FailureMode>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(modes))
    }

    pub fn modes(&self) -> &[FailureMode] {
        &self.modes
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl Default for CurveSelection {
    /// 默认只显示 Torsion_Zx
    fn default() -> Self {
        Self::new([FailureMode::TorsionZx])
    }
}

/// 一条曲线
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub mode: FailureMode,
    pub label: &'static str,
    pub color: RGBColor,
    /// (荷载 kN, 利用率 %)
    pub points: Vec<(f64, f64)>,
}

/// 利用率-荷载图表
#[derive(Debug, Clone)]
pub struct UtilizationChart {
    pub title: String,
    pub angle_deg: f64,
    /// 横坐标（kN），所有曲线共享
    pub loads: Vec<f64>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub series: Vec<ChartSeries>,
}

impl UtilizationChart {
    /// 由计算结果和曲线选择构建图表
    pub fn build(result: &UtilizationResult, selection: &CurveSelection) -> Self {
        let series = selection
            .modes()
            .iter()
            .map(|&mode| {
                let style = style::style_for(mode);
                ChartSeries {
                    mode,
                    label: style.label,
                    color: style.color,
                    points: result
                        .loads()
                        .iter()
                        .copied()
                        .zip(result.curve(mode).iter().copied())
                        .collect(),
                }
            })
            .collect();

        Self {
            title: default_title(result.angle_deg()),
            angle_deg: result.angle_deg(),
            loads: result.loads().to_vec(),
            x_range: load_range(result.loads()),
            y_range: Y_RANGE,
            series,
        }
    }

    /// 替换标题
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// 默认标题
pub fn default_title(angle_deg: f64) -> String {
    format!("Ausnutzung bei α = {}°", angle_deg)
}

/// 横轴范围；空序列或单点时给出可绘制的区间
fn load_range(loads: &[f64]) -> (f64, f64) {
    if loads.is_empty() {
        return (0.0, crate::models::loads::DEFAULT_MAX_LOAD);
    }
    let min = loads.iter().copied().fold(f64::INFINITY, f64::min);
    let max = loads.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > min {
        (min, max)
    } else {
        (min - 1.0, max + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joint::UtilizationCalculator;
    use crate::models::LoadSeries;

    fn result() -> UtilizationResult {
        UtilizationCalculator::default()
            .evaluate(&LoadSeries::default(), 45.0)
            .unwrap()
    }

    #[test]
    fn test_selection_dedup_and_default() {
        let selection = CurveSelection::new([
            FailureMode::DruckStirn,
            FailureMode::TorsionZx,
            FailureMode::DruckStirn,
        ]);
        assert_eq!(
            selection.modes(),
            &[FailureMode::DruckStirn, FailureMode::TorsionZx]
        );
        assert_eq!(CurveSelection::default().modes(), &[FailureMode::TorsionZx]);
        assert_eq!(CurveSelection::all().modes().len(), 5);
    }

    #[test]
    fn test_selection_parse() {
        let selection = CurveSelection::parse(&["torsion-zy", "Schub_Vorholz"]).unwrap();
        assert_eq!(
            selection.modes(),
            &[FailureMode::TorsionZy, FailureMode::SchubVorholz]
        );
        assert!(CurveSelection::parse(&["bending"]).is_err());
    }

    #[test]
    fn test_chart_from_result() {
        let result = result();
        let selection = CurveSelection::new([FailureMode::TorsionZy, FailureMode::DruckGrund]);
        let chart = UtilizationChart::build(&result, &selection);

        assert_eq!(chart.title, "Ausnutzung bei α = 45°");
        assert_eq!(chart.y_range, (0.0, 150.0));
        assert_eq!(chart.x_range.0, 0.0);
        assert!((chart.x_range.1 - 20.0).abs() < 1e-12);
        assert_eq!(chart.series.len(), 2);

        let first = &chart.series[0];
        assert_eq!(first.mode, FailureMode::TorsionZy);
        assert_eq!(first.label, "Schub aus Torsion in ZY-Richtung");
        assert_eq!(first.points.len(), result.len());
        assert_eq!(first.points[100].1, result[FailureMode::TorsionZy][100]);
    }

    #[test]
    fn test_chart_empty_selection_and_title() {
        let chart = UtilizationChart::build(&result(), &CurveSelection::new(Vec::new()))
            .with_title("Custom");
        assert!(chart.series.is_empty());
        assert_eq!(chart.title, "Custom");
    }

    #[test]
    fn test_load_range_degenerate() {
        assert_eq!(load_range(&[]), (0.0, 20.0));
        assert_eq!(load_range(&[5.0]), (4.0, 6.0));
        assert_eq!(load_range(&[3.0, 1.0, 2.0]), (1.0, 3.0));
    }
}
