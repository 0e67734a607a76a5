//! # 曲线样式
//!
//! 每种失效模式固定的显示标签与颜色。
//!
//! ## 依赖关系
//! - 被 `chart/mod.rs` 和 `chart/export.rs` 使用
//! - 使用 `plotters` 的 RGBColor

use crate::models::FailureMode;

use plotters::style::RGBColor;

/// 曲线样式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    /// 图例标签
    pub label: &'static str,
    /// 线条颜色
    pub color: RGBColor,
}

/// 失效模式的图例标签
pub fn label(mode: FailureMode) -> &'static str {
    match mode {
        FailureMode::TorsionZx => "Schub aus Torsion in ZX-Richtung",
        FailureMode::TorsionZy => "Schub aus Torsion in ZY-Richtung",
        FailureMode::DruckStirn => "Versagen der Stirnfläche des Zapfens",
        FailureMode::DruckGrund => "Versagen der Grundfläche",
        FailureMode::SchubVorholz => "Versagen des Vorholzes",
    }
}

/// 失效模式的线条颜色（red, blue, green, orange, purple）
pub fn color(mode: FailureMode) -> RGBColor {
    match mode {
        FailureMode::TorsionZx => RGBColor(255, 0, 0),
        FailureMode::TorsionZy => RGBColor(0, 0, 255),
        FailureMode::DruckStirn => RGBColor(0, 128, 0),
        FailureMode::DruckGrund => RGBColor(255, 165, 0),
        FailureMode::SchubVorholz => RGBColor(128, 0, 128),
    }
}

/// 失效模式的完整样式
pub fn style_for(mode: FailureMode) -> CurveStyle {
    CurveStyle {
        label: label(mode),
        color: color(mode),
    }
}
