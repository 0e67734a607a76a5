//! # 失效模式
//!
//! 榫接节点的五种验算（Nachweis）标识。
//!
//! 标签与颜色属于展示层，见 `chart/style.rs`。
//!
//! ## 依赖关系
//! - 被 `models/result.rs`, `joint/calculator.rs`, `chart/` 使用

use crate::error::ZapfenError;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 失效模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FailureMode {
    /// 扭转引起的 ZX 方向剪切
    #[serde(rename = "Torsion_Zx")]
    TorsionZx,
    /// 扭转引起的 ZY 方向剪切（滚动剪切）
    #[serde(rename = "Torsion_Zy")]
    TorsionZy,
    /// 榫头端面受压
    #[serde(rename = "Druck_Stirn")]
    DruckStirn,
    /// 底面横纹受压
    #[serde(rename = "Druck_Grund")]
    DruckGrund,
    /// 榫前木材（Vorholz）剪切
    #[serde(rename = "Schub_Vorholz")]
    SchubVorholz,
}

impl FailureMode {
    /// 全部失效模式，按固定顺序
    pub const ALL: [FailureMode; 5] = [
        FailureMode::TorsionZx,
        FailureMode::TorsionZy,
        FailureMode::DruckStirn,
        FailureMode::DruckGrund,
        FailureMode::SchubVorholz,
    ];

    /// 标识符（如 `Torsion_Zx`）
    pub fn id(&self) -> &'static str {
        match self {
            FailureMode::TorsionZx => "Torsion_Zx",
            FailureMode::TorsionZy => "Torsion_Zy",
            FailureMode::DruckStirn => "Druck_Stirn",
            FailureMode::DruckGrund => "Druck_Grund",
            FailureMode::SchubVorholz => "Schub_Vorholz",
        }
    }

    /// 在 `ALL` 中的位置
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for FailureMode {
    type Err = ZapfenError;

    /// 接受 `Torsion_Zx` 或 `torsion-zx`，不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "torsion_zx" => Ok(FailureMode::TorsionZx),
            "torsion_zy" => Ok(FailureMode::TorsionZy),
            "druck_stirn" => Ok(FailureMode::DruckStirn),
            "druck_grund" => Ok(FailureMode::DruckGrund),
            "schub_vorholz" => Ok(FailureMode::SchubVorholz),
            _ => Err(ZapfenError::UnknownFailureMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "Torsion_Zx".parse::<FailureMode>().unwrap(),
            FailureMode::TorsionZx
        );
        assert_eq!(
            "schub-vorholz".parse::<FailureMode>().unwrap(),
            FailureMode::SchubVorholz
        );
        assert_eq!(
            " DRUCK_GRUND ".parse::<FailureMode>().unwrap(),
            FailureMode::DruckGrund
        );
        assert!("torsion".parse::<FailureMode>().is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, mode) in FailureMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
            assert_eq!(mode.id().parse::<FailureMode>().unwrap(), *mode);
        }
    }

    #[test]
    fn test_serialized_name_is_id() {
        #[derive(Serialize)]
        struct Row {
            mode: FailureMode,
        }

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        for mode in FailureMode::ALL {
            wtr.serialize(Row { mode }).unwrap();
        }
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let names: Vec<&str> = text.lines().collect();
        let ids: Vec<&str> = FailureMode::ALL.iter().map(|m| m.id()).collect();
        assert_eq!(names, ids);
    }
}
