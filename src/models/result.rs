//! # 利用率计算结果
//!
//! 每种失效模式对应一条利用率曲线（%），与荷载序列逐点对齐：
//! `result[mode][i]` 对应 `loads[i]`。
//!
//! ## 依赖关系
//! - 由 `joint/calculator.rs` 生成
//! - 被 `chart/` 和 `commands/` 使用

use crate::models::FailureMode;

use std::ops::Index;

/// 利用率限值（%），严格大于该值视为超限
pub const UTILIZATION_LIMIT: f64 = 100.0;

/// 利用率计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct UtilizationResult {
    /// 角度 α（度）
    angle_deg: f64,
    /// 荷载序列（kN）
    loads: Vec<f64>,
    /// 各失效模式的利用率（%），按 `FailureMode::ALL` 排列
    curves: [Vec<f64>; 5],
}

impl UtilizationResult {
    pub(crate) fn new(angle_deg: f64, loads: Vec<f64>, curves: [Vec<f64>; 5]) -> Self {
        debug_assert!(curves.iter().all(|c| c.len() == loads.len()));
        Self {
            angle_deg,
            loads,
            curves,
        }
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn loads(&self) -> &[f64] {
        &self.loads
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// 某一失效模式的利用率曲线
    pub fn curve(&self, mode: FailureMode) -> &[f64] {
        &self.curves[mode.index()]
    }

    /// 第 `index` 个荷载下起控制作用的失效模式及其利用率
    pub fn governing(&self, index: usize) -> Option<(FailureMode, f64)> {
        if index >= self.len() {
            return None;
        }
        FailureMode::ALL
            .into_iter()
            .map(|mode| (mode, self.curves[mode.index()][index]))
            .fold(None, |best, (mode, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((mode, value)),
            })
    }

    /// 曲线最大值，返回 (荷载, 利用率)
    pub fn peak(&self, mode: FailureMode) -> Option<(f64, f64)> {
        self.loads
            .iter()
            .zip(self.curve(mode))
            .fold(None, |best, (&load, &value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((load, value)),
            })
    }

    /// 利用率首次超过 `limit`（%）时的荷载
    pub fn first_exceedance(&self, mode: FailureMode, limit: f64) -> Option<f64> {
        self.loads
            .iter()
            .zip(self.curve(mode))
            .find(|(_, value)| **value > limit)
            .map(|(&load, _)| load)
    }
}

impl Index<FailureMode> for UtilizationResult {
    type Output = [f64];

    fn index(&self, mode: FailureMode) -> &Self::Output {
        self.curve(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UtilizationResult {
        UtilizationResult::new(
            45.0,
            vec![0.0, 5.0, 10.0],
            [
                vec![0.0, 10.0, 20.0],
                vec![0.0, 40.0, 80.0],
                vec![0.0, 60.0, 120.0],
                vec![0.0, 5.0, 10.0],
                vec![0.0, 50.0, 100.0],
            ],
        )
    }

    #[test]
    fn test_governing_mode() {
        let result = sample();
        assert_eq!(result.governing(2), Some((FailureMode::DruckStirn, 120.0)));
        // 全零时取第一个
        assert_eq!(result.governing(0), Some((FailureMode::TorsionZx, 0.0)));
        assert_eq!(result.governing(3), None);
    }

    #[test]
    fn test_peak_and_exceedance() {
        let result = sample();
        assert_eq!(result.peak(FailureMode::TorsionZy), Some((10.0, 80.0)));
        assert_eq!(
            result.first_exceedance(FailureMode::DruckStirn, UTILIZATION_LIMIT),
            Some(10.0)
        );
        // 恰好 100 % 不算超限
        assert_eq!(
            result.first_exceedance(FailureMode::SchubVorholz, UTILIZATION_LIMIT),
            None
        );
        assert_eq!(
            result.first_exceedance(FailureMode::TorsionZx, UTILIZATION_LIMIT),
            None
        );
    }

    #[test]
    fn test_index_by_mode() {
        let result = sample();
        assert_eq!(&result[FailureMode::DruckGrund], &[0.0, 5.0, 10.0]);
        assert_eq!(result.len(), 3);
    }
}
