//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::models::result::UTILIZATION_LIMIT;

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印说明文字（图注等）
pub fn print_note(msg: &str) {
    println!("{} {}", "[i]".cyan(), msg.dimmed());
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 格式化利用率单元格，超限值后加 `!` 标记
///
/// 不使用颜色，表格列宽按纯文本计算。
pub fn format_utilization(value: f64) -> String {
    if value > UTILIZATION_LIMIT {
        format!("{:.1} !", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_utilization() {
        assert_eq!(format_utilization(26.020442194993603), "26.0");
        assert_eq!(format_utilization(100.0), "100.0");
        assert_eq!(format_utilization(170.22941028565035), "170.2 !");
        assert_eq!(format_utilization(-3.25), "-3.2");
    }

    #[test]
    fn test_marker_agrees_with_exceedance() {
        use crate::models::{FailureMode, UtilizationResult};

        let at_limit = UtilizationResult::new(
            45.0,
            vec![1.0],
            std::array::from_fn(|_| vec![UTILIZATION_LIMIT]),
        );
        for mode in FailureMode::ALL {
            let value = at_limit[mode][0];
            let marked = format_utilization(value).ends_with('!');
            let exceeded = at_limit.first_exceedance(mode, UTILIZATION_LIMIT).is_some();
            assert_eq!(marked, exceeded);
        }
    }
}
