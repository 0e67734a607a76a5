//! # 榫接节点计算模块
//!
//! 提供 Zapfen（榫头）节点的利用率计算功能。
//!
//! ## 子模块
//! - `config`: 材料强度、几何尺寸与偏心系数
//! - `calculator`: 五种验算的利用率计算
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 的 LoadSeries, UtilizationResult

pub mod calculator;
pub mod config;

pub use calculator::{JointState, UtilizationCalculator};
pub use config::JointConfig;
