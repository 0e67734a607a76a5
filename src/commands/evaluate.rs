//! # evaluate 命令实现
//!
//! 计算给定角度下的利用率并打印表格。
//!
//! ## 功能
//! - 打印角度相关的中间量（m, kα, 承载力）
//! - 按荷载抽样打印利用率表格与控制模式
//! - 汇总每条曲线的最大值与首次超过 100 % 时的荷载
//! - 可选导出完整 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/evaluate.rs` 定义的 EvaluateArgs
//! - 使用 `joint/` 进行计算
//! - 使用 `chart/export.rs` 导出 CSV
//! - 使用 `utils/output.rs` 输出

use super::{build_loads, build_selection, reference_calculator};
use crate::chart::{export, CurveSelection};
use crate::cli::evaluate::EvaluateArgs;
use crate::error::Result;
use crate::joint::JointState;
use crate::models::result::UTILIZATION_LIMIT;
use crate::models::UtilizationResult;
use crate::utils::output;

use tabled::builder::Builder;
use tabled::{Table, Tabled};

/// 执行 evaluate 命令
pub fn execute(args: EvaluateArgs) -> Result<()> {
    output::print_header("Tenon Joint Utilization");

    let angle = f64::from(args.loads.angle);
    let loads = build_loads(&args.loads, &args.load)?;
    let selection = build_selection(&args.modes, CurveSelection::all())?;

    output::print_info(&format!("Angle α = {}°", angle));
    output::print_info(&format!("{} load values", loads.len()));

    let calculator = reference_calculator()?;
    let state = calculator.joint_state(angle)?;
    let result = calculator.evaluate(&loads, angle)?;

    print_state(&state);
    print_utilization_table(&result, &selection, args.rows);
    print_summary(&result, &selection);

    if let Some(path) = &args.output {
        export::result_to_csv(&result, path)?;
        output::print_success(&format!("Utilization table saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印角度相关的中间量
fn print_state(state: &JointState) {
    #[derive(Tabled)]
    struct StateRow {
        #[tabled(rename = "Quantity")]
        name: &'static str,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = vec![
        StateRow {
            name: "sin α / cos α",
            value: format!("{:.4} / {:.4}", state.sin, state.cos),
        },
        StateRow {
            name: "t = hs / (2 sin α) [mm]",
            value: format!("{:.2}", state.t),
        },
        StateRow {
            name: "Load split m",
            value: format!("{:.6}", state.m),
        },
        StateRow {
            name: "p / q",
            value: format!("{:.4} / {:.4}", state.p, state.q),
        },
        StateRow {
            name: "kα",
            value: format!("{:.4}", state.k_alpha),
        },
        StateRow {
            name: "End face capacity Fsfcald [kN]",
            value: format!("{:.3}", state.end_face_capacity),
        },
        StateRow {
            name: "Base capacity Fgfcald [kN]",
            value: format!("{:.3}", state.base_capacity),
        },
    ];

    output::print_header(&format!("Joint State at α = {}°", state.angle_deg));
    println!("{}", Table::new(rows));
}

/// 打印利用率表格（列随选中的失效模式变化）
fn print_utilization_table(result: &UtilizationResult, selection: &CurveSelection, rows: usize) {
    let mut builder = Builder::default();

    let mut header = vec!["Nd (kN)".to_string()];
    header.extend(selection.modes().iter().map(|m| format!("{} (%)", m)));
    header.push("Governing".to_string());
    builder.push_record(header);

    for i in sample_indices(result.len(), rows) {
        let mut record = vec![format!("{:.2}", result.loads()[i])];
        record.extend(
            selection
                .modes()
                .iter()
                .map(|m| output::format_utilization(result[*m][i])),
        );
        record.push(
            result
                .governing(i)
                .map(|(mode, value)| format!("{} ({:.1} %)", mode, value))
                .unwrap_or_default(),
        );
        builder.push_record(record);
    }

    output::print_header("Utilization (Ausnutzung)");
    println!("{}", builder.build());
}

/// 打印每条曲线的最大值与首次超过 100 % 的荷载
fn print_summary(result: &UtilizationResult, selection: &CurveSelection) {
    #[derive(Tabled)]
    struct SummaryRow {
        #[tabled(rename = "Failure mode")]
        mode: String,
        #[tabled(rename = "Max (%)")]
        peak: String,
        #[tabled(rename = "at Nd (kN)")]
        peak_load: String,
        #[tabled(rename = "Nd > 100 % (kN)")]
        exceedance: String,
    }

    let rows: Vec<SummaryRow> = selection
        .modes()
        .iter()
        .map(|&mode| {
            let (peak_load, peak) = result
                .peak(mode)
                .map(|(load, value)| (format!("{:.2}", load), format!("{:.1}", value)))
                .unwrap_or_else(|| ("-".to_string(), "-".to_string()));
            SummaryRow {
                mode: mode.to_string(),
                peak,
                peak_load,
                exceedance: result
                    .first_exceedance(mode, UTILIZATION_LIMIT)
                    .map(|load| format!("{:.2}", load))
                    .unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect();

    if rows.is_empty() {
        return;
    }

    output::print_header("Summary");
    println!("{}", Table::new(rows));

    for &mode in selection.modes() {
        if result.first_exceedance(mode, UTILIZATION_LIMIT).is_some() {
            output::print_warning(&format!("{} exceeds 100 % within the load range", mode));
        }
    }
}

/// 在 `[0, len)` 上均匀抽取至多 `rows` 个下标，包含首尾
fn sample_indices(len: usize, rows: usize) -> Vec<usize> {
    if len == 0 || rows == 0 {
        return Vec::new();
    }
    if len <= rows {
        return (0..len).collect();
    }
    if rows == 1 {
        return vec![0];
    }

    let mut indices: Vec<usize> = (0..rows)
        .map(|k| ((k * (len - 1)) as f64 / (rows - 1) as f64).round() as usize)
        .collect();
    indices.dedup();
    indices
}
