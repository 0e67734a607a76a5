//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `joint/`, `chart/`, `models/`, `utils/`
//! - 子模块: evaluate, plot, params

pub mod evaluate;
pub mod params;
pub mod plot;

use crate::chart::CurveSelection;
use crate::cli::{Commands, LoadArgs, ModeArgs};
use crate::error::{Result, ZapfenError};
use crate::joint::{JointConfig, UtilizationCalculator};
use crate::models::LoadSeries;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Plot(args) => plot::execute(args),
        Commands::Params => params::execute(),
    }
}

/// 创建使用参考节点参数的计算器
fn reference_calculator() -> Result<UtilizationCalculator> {
    checked_calculator(JointConfig::default())
}

/// 校验参数后创建计算器；偏心系数非零时打印警告
fn checked_calculator(config: JointConfig) -> Result<UtilizationCalculator> {
    let calculator = UtilizationCalculator::new(config)?;
    if calculator.config().has_eccentricity() {
        output::print_warning(
            "Eccentricity factors mh/mv are non-zero; these formulas are not validated for that case",
        );
    }
    Ok(calculator)
}

/// 由命令行参数构造荷载序列；显式给出的荷载优先
fn build_loads(args: &LoadArgs, explicit: &[f64]) -> Result<LoadSeries> {
    if !explicit.is_empty() {
        return Ok(LoadSeries::new(explicit.to_vec()));
    }
    let (start, stop) = parse_range(&args.range)?;
    LoadSeries::arange(start, stop, args.step)
}

/// 由命令行参数构造曲线选择；未指定时使用 `fallback`
fn build_selection(args: &ModeArgs, fallback: CurveSelection) -> Result<CurveSelection> {
    if args.all {
        Ok(CurveSelection::all())
    } else if args.modes.is_empty() {
        Ok(fallback)
    } else {
        CurveSelection::parse(&args.modes)
    }
}

/// 解析荷载范围（如 "0-20"，单位 kN）
fn parse_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(ZapfenError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| ZapfenError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| ZapfenError::InvalidRange(range.to_string()))?;

    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(ZapfenError::InvalidRange(format!(
            "{} (must be min <= max)",
            range
        )));
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FailureMode;

    fn load_args(range: &str, step: f64) -> LoadArgs {
        LoadArgs {
            angle: 45,
            range: range.to_string(),
            step,
        }
    }

    #[test]
    fn test_reference_calculator() {
        let calculator = reference_calculator().unwrap();
        assert_eq!(calculator.config(), &JointConfig::default());
    }

    #[test]
    fn test_checked_calculator_rejects_bad_config() {
        let mut coupled = JointConfig::default();
        coupled.eccentricity.mh = 2.0;
        coupled.eccentricity.mv = 0.5;
        assert!(matches!(
            checked_calculator(coupled),
            Err(ZapfenError::ComputationError { .. })
        ));

        let mut negative = JointConfig::default();
        negative.geometry.tv = -40.0;
        assert!(matches!(
            checked_calculator(negative),
            Err(ZapfenError::InvalidInput { .. })
        ));

        let mut eccentric = JointConfig::default();
        eccentric.eccentricity.mh = 0.1;
        assert!(checked_calculator(eccentric).unwrap().config().has_eccentricity());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0-20").unwrap(), (0.0, 20.0));
        assert_eq!(parse_range("2.5 - 7.5").unwrap(), (2.5, 7.5));
        assert!(parse_range("20-0").is_err());
        assert!(parse_range("0-10-20").is_err());
        assert!(parse_range("a-b").is_err());
    }

    #[test]
    fn test_build_loads() {
        let loads = build_loads(&load_args("0-20", 0.1), &[]).unwrap();
        assert_eq!(loads, LoadSeries::default());

        let explicit = build_loads(&load_args("0-20", 0.1), &[10.0, 5.0]).unwrap();
        assert_eq!(explicit.values(), &[10.0, 5.0]);

        assert!(build_loads(&load_args("0-20", 0.0), &[]).is_err());
    }

    #[test]
    fn test_build_selection() {
        let none = ModeArgs {
            modes: vec![],
            all: false,
        };
        assert_eq!(
            build_selection(&none, CurveSelection::default()).unwrap(),
            CurveSelection::default()
        );

        let all = ModeArgs {
            modes: vec![],
            all: true,
        };
        assert_eq!(
            build_selection(&all, CurveSelection::default()).unwrap(),
            CurveSelection::all()
        );

        let some = ModeArgs {
            modes: vec!["druck-grund".to_string()],
            all: false,
        };
        assert_eq!(
            build_selection(&some, CurveSelection::all()).unwrap().modes(),
            &[FailureMode::DruckGrund]
        );
    }
}
