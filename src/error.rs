//! # 统一错误处理模块
//!
//! 定义 zapfen 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// zapfen 统一错误类型
#[derive(Error, Debug)]
pub enum ZapfenError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown failure mode: {0} (expected one of Torsion_Zx, Torsion_Zy, Druck_Stirn, Druck_Grund, Schub_Vorholz)")]
    UnknownFailureMode(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Computation failed for '{quantity}': {reason}")]
    ComputationError { quantity: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

impl ZapfenError {
    /// 构造 InvalidInput 错误
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ZapfenError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 构造 ComputationError 错误
    pub fn computation(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        ZapfenError::ComputationError {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ZapfenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ZapfenError::invalid_input("angle", 0.0, "must be in (0, 90]");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'angle': 0 - must be in (0, 90]"
        );

        let err = ZapfenError::computation("m", "denominator is zero");
        assert!(err.to_string().contains("'m'"));
    }
}
