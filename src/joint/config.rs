//! # 节点参数
//!
//! 榫接节点的材料强度、几何尺寸与偏心系数。所有参数在进程启动时确定，
//! 以不可变值的形式显式传入计算器。
//!
//! 设计强度统一按 `f_d = f_k * kmod / γM` 计算。
//!
//! ## 依赖关系
//! - 被 `joint/calculator.rs` 使用
//! - 被 `commands/params.rs` 用于打印参数表

use crate::error::{Result, ZapfenError};

/// 有效承压长度系数：lseff = 1.3 * hs
pub const BEARING_LENGTH_FACTOR: f64 = 1.3;
/// 榫前木材有效长度上限系数：lveff = min(lv, 3 * tv)
pub const VORHOLZ_LENGTH_FACTOR: f64 = 3.0;

/// 木材强度（N/mm²）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimberStrength {
    /// 顺纹抗压强度标准值 fc,0,k
    pub fc0k: f64,
    /// 横纹抗压强度标准值 fc,90,k
    pub fc90k: f64,
    /// 抗剪强度标准值 fv,k
    pub fvk: f64,
    /// 滚动剪切强度标准值 fr,k
    pub frs: f64,
    /// 横纹受压系数 kc,90
    pub kc90: f64,
}

impl Default for TimberStrength {
    fn default() -> Self {
        Self {
            fc0k: 21.0,
            fc90k: 2.5,
            fvk: 2.0,
            frs: 1.0,
            kc90: 1.5,
        }
    }
}

/// 节点几何（mm）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointGeometry {
    /// 主梁宽度
    pub bg: f64,
    /// 主梁高度
    pub hg: f64,
    /// 次梁宽度
    pub bs: f64,
    /// 次梁高度
    pub hs: f64,
    /// 次梁长度
    pub ls: f64,
    /// 榫头长度
    pub tv: f64,
    /// 榫头厚度
    pub bza: f64,
    /// 榫眼宽度
    pub bzal: f64,
    /// 榫前木材长度（Vorholz）
    pub lv: f64,
}

impl Default for JointGeometry {
    fn default() -> Self {
        Self {
            bg: 200.0,
            hg: 220.0,
            bs: 140.0,
            hs: 150.0,
            ls: 4000.0,
            tv: 40.0,
            bza: 50.0,
            bzal: 55.0,
            lv: 90.0,
        }
    }
}

/// 偏心耦合系数
///
/// 参考节点中 mh = mv = 0。非零值未经验证。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Eccentricity {
    pub mh: f64,
    pub mv: f64,
}

impl Eccentricity {
    /// 耦合项 b = 1 - mh * mv
    pub fn coupling(&self) -> f64 {
        1.0 - self.mh * self.mv
    }

    pub fn is_zero(&self) -> bool {
        self.mh == 0.0 && self.mv == 0.0
    }
}

/// 节点完整参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointConfig {
    pub strength: TimberStrength,
    pub geometry: JointGeometry,
    pub eccentricity: Eccentricity,
    /// 修正系数 kmod
    pub kmod: f64,
    /// 材料分项系数 γM
    pub gamma_m: f64,
}

impl Default for JointConfig {
    fn default() -> Self {
        Self {
            strength: TimberStrength::default(),
            geometry: JointGeometry::default(),
            eccentricity: Eccentricity::default(),
            kmod: 0.6,
            gamma_m: 1.3,
        }
    }
}

impl JointConfig {
    /// 标准值转设计值：f_k * kmod / γM
    pub fn design_value(&self, characteristic: f64) -> f64 {
        characteristic * self.kmod / self.gamma_m
    }

    /// fc,0,d
    pub fn fc0d(&self) -> f64 {
        self.design_value(self.strength.fc0k)
    }

    /// fc,90,d
    pub fn fc90d(&self) -> f64 {
        self.design_value(self.strength.fc90k)
    }

    /// fv,d
    pub fn fvd(&self) -> f64 {
        self.design_value(self.strength.fvk)
    }

    /// fr,d
    pub fn frsd(&self) -> f64 {
        self.design_value(self.strength.frs)
    }

    /// 有效承压长度 lseff（mm）
    pub fn lseff(&self) -> f64 {
        BEARING_LENGTH_FACTOR * self.geometry.hs
    }

    /// 榫前木材有效剪切长度 lveff（mm）
    pub fn lveff(&self) -> f64 {
        self.geometry
            .lv
            .min(VORHOLZ_LENGTH_FACTOR * self.geometry.tv)
    }

    /// 榫头合力作用点偏移 tx（mm）
    pub fn tx(&self) -> f64 {
        0.5 * self.geometry.tv
    }

    /// 是否启用了偏心耦合（未经验证的参数区域）
    pub fn has_eccentricity(&self) -> bool {
        !self.eccentricity.is_zero()
    }

    /// 检查参数的取值范围
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("kmod", self.kmod),
            ("gamma_m", self.gamma_m),
            ("fc0k", self.strength.fc0k),
            ("fc90k", self.strength.fc90k),
            ("fvk", self.strength.fvk),
            ("frs", self.strength.frs),
            ("kc90", self.strength.kc90),
            ("bg", self.geometry.bg),
            ("hg", self.geometry.hg),
            ("bs", self.geometry.bs),
            ("hs", self.geometry.hs),
            ("ls", self.geometry.ls),
            ("tv", self.geometry.tv),
            ("bza", self.geometry.bza),
            ("bzal", self.geometry.bzal),
            ("lv", self.geometry.lv),
        ];

        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ZapfenError::invalid_input(
                    field,
                    value,
                    "must be a positive finite number",
                ));
            }
        }

        for (field, value) in [("mh", self.eccentricity.mh), ("mv", self.eccentricity.mv)] {
            if !value.is_finite() {
                return Err(ZapfenError::invalid_input(field, value, "must be finite"));
            }
        }

        if self.eccentricity.coupling() == 0.0 {
            return Err(ZapfenError::computation(
                "b = 1 - mh * mv",
                "eccentricity coupling term is zero",
            ));
        }

        Ok(())
    }
}
