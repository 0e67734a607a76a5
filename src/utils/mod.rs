//! # 工具模块
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `main.rs` 使用
//! - 子模块: output

pub mod output;
