//! # 荷载序列
//!
//! 有序的设计轴力 Nd（kN）序列，作为曲线图的横轴。
//!
//! ## 依赖关系
//! - 被 `joint/calculator.rs` 和 `commands/` 使用

use crate::error::{Result, ZapfenError};

/// 默认荷载上限（kN）
pub const DEFAULT_MAX_LOAD: f64 = 20.0;
/// 默认荷载步长（kN）
pub const DEFAULT_LOAD_STEP: f64 = 0.1;
/// 等步长序列的最大点数
pub const MAX_LOAD_POINTS: usize = 100_000;

/// 荷载序列（kN），顺序有意义
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSeries {
    values: Vec<f64>,
}

impl LoadSeries {
    /// 由任意荷载值创建
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// 等步长序列 `start, start + step, ...`，包含 `stop`
    ///
    /// 每个值按 `start + i * step` 计算，不做累加。
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ZapfenError::invalid_input(
                "step",
                step,
                "step must be a positive number",
            ));
        }
        if !start.is_finite() || !stop.is_finite() || stop < start {
            return Err(ZapfenError::InvalidRange(format!(
                "{}-{} (must be finite with start <= stop)",
                start, stop
            )));
        }

        let intervals = ((stop - start) / step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_LOAD_POINTS as f64 {
            return Err(ZapfenError::invalid_input(
                "step",
                step,
                format!("load series would exceed {} points", MAX_LOAD_POINTS),
            ));
        }

        Ok(Self::from_steps(start, step, intervals as usize + 1))
    }

    fn from_steps(start: f64, step: f64, count: usize) -> Self {
        Self {
            values: (0..count).map(|i| start + i as f64 * step).collect(),
        }
    }

    /// 荷载值
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

}

impl Default for LoadSeries {
    /// 0 ~ 20 kN，步长 0.1 kN
    fn default() -> Self {
        let count = (DEFAULT_MAX_LOAD / DEFAULT_LOAD_STEP).round() as usize + 1;
        Self::from_steps(0.0, DEFAULT_LOAD_STEP, count)
    }
}

impl From<Vec<f64>> for LoadSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
