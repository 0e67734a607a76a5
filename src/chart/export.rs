//! # 利用率数据导出
//!
//! 导出利用率曲线到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV（选中曲线）: 荷载 + 每条选中曲线一列
//! - CSV（完整表）: 荷载 + 全部五种验算 + 控制模式
//! - XY: 制表符分隔的纯文本，带 `#` 注释头
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/evaluate.rs` 调用
//! - 使用 `chart/mod.rs` 的 UtilizationChart
//! - 使用 `csv` 库写入 CSV 文件

use crate::chart::UtilizationChart;
use crate::error::{Result, ZapfenError};
use crate::models::{FailureMode, UtilizationResult};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 完整利用率表中的一行
#[derive(Debug, Clone, Serialize)]
pub struct UtilizationRecord {
    #[serde(rename = "Nd_kN")]
    pub load_kn: f64,
    #[serde(rename = "Torsion_Zx")]
    pub torsion_zx: f64,
    #[serde(rename = "Torsion_Zy")]
    pub torsion_zy: f64,
    #[serde(rename = "Druck_Stirn")]
    pub druck_stirn: f64,
    #[serde(rename = "Druck_Grund")]
    pub druck_grund: f64,
    #[serde(rename = "Schub_Vorholz")]
    pub schub_vorholz: f64,
    pub governing: Option<FailureMode>,
}

/// 将计算结果逐行展开
pub fn records(result: &UtilizationResult) -> Vec<UtilizationRecord> {
    (0..result.len())
        .map(|i| UtilizationRecord {
            load_kn: result.loads()[i],
            torsion_zx: result[FailureMode::TorsionZx][i],
            torsion_zy: result[FailureMode::TorsionZy][i],
            druck_stirn: result[FailureMode::DruckStirn][i],
            druck_grund: result[FailureMode::DruckGrund][i],
            schub_vorholz: result[FailureMode::SchubVorholz][i],
            governing: result.governing(i).map(|(mode, _)| mode),
        })
        .collect()
}

/// 导出完整利用率表为 CSV
pub fn result_to_csv(result: &UtilizationResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for record in records(result) {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| ZapfenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出选中曲线为 CSV
pub fn chart_to_csv(chart: &UtilizationChart, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["Nd_kN".to_string()];
    header.extend(chart.series.iter().map(|s| s.mode.id().to_string()));
    wtr.write_record(&header)?;

    for (i, load) in chart.loads.iter().enumerate() {
        let mut row = vec![format!("{:.4}", load)];
        row.extend(chart.series.iter().map(|s| format!("{:.6}", s.points[i].1)));
        wtr.write_record(&row)?;
    }

    wtr.flush().map_err(|e| ZapfenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出选中曲线为 XY 格式
pub fn chart_to_xy(chart: &UtilizationChart, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| ZapfenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# {}", chart.title).map_err(write_err)?;
    writeln!(out, "# alpha = {} deg", chart.angle_deg).map_err(write_err)?;
    for series in &chart.series {
        writeln!(out, "# {}: {}", series.mode.id(), series.label).map_err(write_err)?;
    }
    let columns: Vec<&str> = chart.series.iter().map(|s| s.mode.id()).collect();
    writeln!(out, "# Columns: Nd (kN), {}", columns.join(", ")).map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for (i, load) in chart.loads.iter().enumerate() {
        write!(out, "{:.4}", load).map_err(write_err)?;
        for series in &chart.series {
            write!(out, "\t{:.6}", series.points[i].1).map_err(write_err)?;
        }
        writeln!(out).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::CurveSelection;
    use crate::joint::UtilizationCalculator;

    fn result() -> UtilizationResult {
        UtilizationCalculator::default()
            .evaluate_loads(&[0.0, 5.0, 10.0], 45.0)
            .unwrap()
    }

    #[test]
    fn test_records() {
        let rows = records(&result());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].load_kn, 0.0);
        assert_eq!(rows[2].governing, Some(FailureMode::SchubVorholz));
    }

    #[test]
    fn test_result_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        result_to_csv(&result(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Nd_kN,Torsion_Zx,Torsion_Zy,Druck_Stirn,Druck_Grund,Schub_Vorholz,governing"
        );
        assert_eq!(lines.count(), 3);
        assert!(text.lines().last().unwrap().ends_with(",Schub_Vorholz"));
    }

    #[test]
    fn test_chart_to_csv() {
        let chart = UtilizationChart::build(
            &result(),
            &CurveSelection::new([FailureMode::DruckStirn, FailureMode::TorsionZx]),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.csv");
        chart_to_csv(&chart, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Nd_kN,Druck_Stirn,Torsion_Zx");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0.0000,0.000000,0.000000"));
    }

    #[test]
    fn test_chart_to_xy() {
        let chart = UtilizationChart::build(&result(), &CurveSelection::default());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.xy");
        chart_to_xy(&chart, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Ausnutzung bei α = 45°\n# alpha = 45 deg\n"));
        let data: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0], "0.0000\t0.000000");
    }

    #[test]
    fn test_xy_keeps_angle_with_custom_title() {
        let chart =
            UtilizationChart::build(&result(), &CurveSelection::default()).with_title("Custom");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.xy");
        chart_to_xy(&chart, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header: Vec<&str> = text.lines().take(2).collect();
        assert_eq!(header, vec!["# Custom", "# alpha = 45 deg"]);
    }

    #[test]
    fn test_empty_selection_keeps_loads() {
        let chart = UtilizationChart::build(&result(), &CurveSelection::new(Vec::new()));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loads.csv");
        chart_to_csv(&chart, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Nd_kN", "0.0000", "5.0000", "10.0000"]);
    }
}
