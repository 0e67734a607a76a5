//! # 数据模型模块
//!
//! 定义荷载序列、失效模式与利用率结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `joint/`, `chart/` 和 `commands/` 使用
//! - 子模块: failure_mode, loads, result

pub mod failure_mode;
pub mod loads;
pub mod result;

pub use failure_mode::FailureMode;
pub use loads::LoadSeries;
pub use result::UtilizationResult;
