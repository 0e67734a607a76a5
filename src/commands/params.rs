//! # params 命令实现
//!
//! 打印参考节点的材料强度、几何尺寸及派生量。
//!
//! ## 依赖关系
//! - 使用 `joint/config.rs` 的 JointConfig
//! - 使用 `utils/output.rs` 输出

use super::reference_calculator;
use crate::error::Result;
use crate::joint::JointConfig;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ParamRow {
    #[tabled(rename = "Parameter")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

impl ParamRow {
    fn new(name: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            name,
            value: format!("{}", value),
            unit,
        }
    }

    fn derived(name: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            name,
            value: format!("{:.4}", value),
            unit,
        }
    }
}

/// 执行 params 命令
pub fn execute() -> Result<()> {
    let calculator = reference_calculator()?;
    let config = calculator.config();

    output::print_header("Joint Parameters");

    println!("{}", Table::new(strength_rows(config)));
    println!();
    println!("{}", Table::new(geometry_rows(config)));
    println!();
    println!("{}", Table::new(derived_rows(config)));

    output::print_separator();
    let ecc = config.eccentricity;
    if config.has_eccentricity() {
        output::print_warning(&format!(
            "Eccentricity mh = {}, mv = {} (b = {:.4})",
            ecc.mh,
            ecc.mv,
            ecc.coupling()
        ));
    } else {
        output::print_info("Eccentricity mh = mv = 0 (no coupling)");
    }

    Ok(())
}

fn strength_rows(config: &JointConfig) -> Vec<ParamRow> {
    let s = &config.strength;
    vec![
        ParamRow::new("fc,0,k", s.fc0k, "N/mm²"),
        ParamRow::new("fc,90,k", s.fc90k, "N/mm²"),
        ParamRow::new("fv,k", s.fvk, "N/mm²"),
        ParamRow::new("fr,k", s.frs, "N/mm²"),
        ParamRow::new("kc,90", s.kc90, "-"),
        ParamRow::new("kmod", config.kmod, "-"),
        ParamRow::new("γM", config.gamma_m, "-"),
    ]
}

fn geometry_rows(config: &JointConfig) -> Vec<ParamRow> {
    let g = &config.geometry;
    vec![
        ParamRow::new("bg (main beam width)", g.bg, "mm"),
        ParamRow::new("hg (main beam height)", g.hg, "mm"),
        ParamRow::new("bs (secondary beam width)", g.bs, "mm"),
        ParamRow::new("hs (secondary beam height)", g.hs, "mm"),
        ParamRow::new("ls (secondary beam length)", g.ls, "mm"),
        ParamRow::new("tv (tenon length)", g.tv, "mm"),
        ParamRow::new("bza (tenon thickness)", g.bza, "mm"),
        ParamRow::new("bzal (mortise width)", g.bzal, "mm"),
        ParamRow::new("lv (Vorholz length)", g.lv, "mm"),
    ]
}

fn derived_rows(config: &JointConfig) -> Vec<ParamRow> {
    vec![
        ParamRow::derived("fc,0,d", config.fc0d(), "N/mm²"),
        ParamRow::derived("fc,90,d", config.fc90d(), "N/mm²"),
        ParamRow::derived("fv,d", config.fvd(), "N/mm²"),
        ParamRow::derived("fr,d", config.frsd(), "N/mm²"),
        ParamRow::derived("lseff", config.lseff(), "mm"),
        ParamRow::derived("lveff", config.lveff(), "mm"),
        ParamRow::derived("tx", config.tx(), "mm"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_tables() {
        let config = JointConfig::default();
        assert_eq!(strength_rows(&config).len(), 7);
        assert_eq!(geometry_rows(&config).len(), 9);

        let derived = derived_rows(&config);
        let lseff = derived.iter().find(|r| r.name == "lseff").unwrap();
        assert_eq!(lseff.value, "195.0000");

        let table = Table::new(geometry_rows(&config)).to_string();
        assert!(table.contains("bzal (mortise width)"));
        assert!(table.contains("4000"));
    }
}
