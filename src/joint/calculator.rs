//! # 榫接节点利用率计算器
//!
//! 由角度 α 与荷载序列 Nd 计算五种验算的利用率曲线（%）。
//!
//! ## 算法概述
//! 1. 由角度求 sin α, cos α 及荷载分配系数 m
//! 2. 求支座反力与榫头根部内力，再求偏移 lseff/2 处的内力
//! 3. 沿承压长度积分得到设计内力 dN, dV, dM
//! 4. 扭转剪应力（ZX, ZY 两个方向）
//! 5. 端面斜纹承压（各向异性强度交互公式）
//! 6. 底面横纹承压
//! 7. 榫前木材（Vorholz）剪切
//!
//! 第 1、5、6 步只与角度有关，结果保存在 [`JointState`] 中；
//! 其余各步对每个荷载逐点计算，所有利用率都与荷载成正比。
//!
//! ## 依赖关系
//! - 被 `commands/evaluate.rs`, `commands/plot.rs` 调用
//! - 使用 `joint/config.rs` 的 JointConfig
//! - 生成 `models/result.rs` 的 UtilizationResult

use crate::error::{Result, ZapfenError};
use crate::joint::config::JointConfig;
use crate::models::{LoadSeries, UtilizationResult};

/// 扭转截面模量系数：Wt = (0.18 / 0.8) * hs² * lseff
const TORSION_MODULUS_FACTOR: f64 = 0.18 / 0.8;
/// ZY 方向弯矩引起的剪应力系数
const TORSION_ZY_FACTOR: f64 = 0.915;
/// 端面承压扩散长度（mm），Aeff = (tv + 30 sin α) * bza
const END_FACE_SPREAD: f64 = 30.0;
/// 底面承压附加长度（mm），Ageff = (bg - bzal) * (hs / sin α + 60)
const BASE_SPREAD: f64 = 60.0;

/// 只与角度有关的节点状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointState {
    /// 角度 α（度）
    pub angle_deg: f64,
    pub sin: f64,
    pub cos: f64,
    /// t = hs / (2 sin α)
    pub t: f64,
    /// (sin α - mh cos α) / b
    pub p: f64,
    /// (cos α + mh sin α) / b
    pub q: f64,
    /// 荷载分配系数 m
    pub m: f64,
    /// 斜纹承压强度折减系数 kα
    pub k_alpha: f64,
    /// 端面设计承载力 Fsfcald（kN）
    pub end_face_capacity: f64,
    /// 底面设计承载力 Fgfcald（kN）
    pub base_capacity: f64,
}

/// 单个荷载下的设计内力
#[derive(Debug, Clone, Copy)]
struct DesignActions {
    /// dNcal（kN）
    normal: f64,
    /// dVcal（kN）
    shear: f64,
    /// dMcal（kN·mm）
    moment: f64,
}

/// 利用率计算器
#[derive(Debug, Clone)]
pub struct UtilizationCalculator {
    config: JointConfig,
}

impl Default for UtilizationCalculator {
    fn default() -> Self {
        Self {
            config: JointConfig::default(),
        }
    }
}

impl UtilizationCalculator {
    /// 创建计算器，参数先经过校验
    pub fn new(config: JointConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &JointConfig {
        &self.config
    }

    /// 计算荷载序列在给定角度下的利用率
    pub fn evaluate(&self, loads: &LoadSeries, angle_deg: f64) -> Result<UtilizationResult> {
        self.evaluate_loads(loads.values(), angle_deg)
    }

    /// 同 [`evaluate`](Self::evaluate)，直接接受荷载切片
    pub fn evaluate_loads(&self, loads: &[f64], angle_deg: f64) -> Result<UtilizationResult> {
        if let Some((i, nd)) = loads.iter().enumerate().find(|(_, nd)| !nd.is_finite()) {
            return Err(ZapfenError::invalid_input(
                format!("loads[{}]", i),
                nd,
                "load must be a finite number",
            ));
        }

        let state = self.joint_state(angle_deg)?;

        let mut curves: [Vec<f64>; 5] = std::array::from_fn(|_| Vec::with_capacity(loads.len()));
        for &nd in loads {
            let values = self.utilization_at(&state, nd)?;
            for (curve, value) in curves.iter_mut().zip(values) {
                curve.push(value);
            }
        }

        Ok(UtilizationResult::new(angle_deg, loads.to_vec(), curves))
    }

    /// 计算只与角度有关的量
    pub fn joint_state(&self, angle_deg: f64) -> Result<JointState> {
        validate_angle(angle_deg)?;

        let cfg = &self.config;
        let g = &cfg.geometry;
        let st = &cfg.strength;
        let mh = cfg.eccentricity.mh;
        let mv = cfg.eccentricity.mv;
        let tx = cfg.tx();

        let alpha = angle_deg.to_radians();
        let s = alpha.sin();
        let c = alpha.cos();

        let t = checked_ratio(g.hs, 2.0 * s, "t = hs / (2 sin α)")?;
        let b = cfg.eccentricity.coupling();
        let p = checked_ratio(s - mh * c, b, "b = 1 - mh * mv")?;
        let q = checked_ratio(c + mh * s, b, "b = 1 - mh * mv")?;

        // 荷载分配系数
        let num = p * (t - mv * tx) + c * (g.ls * s + tx) - s * (g.ls * c + t);
        let den = q * (t - mv * tx) - s * (g.ls * s + tx) - c * (g.ls * c + t);
        let m = checked_ratio(num, den, "m")?;

        // 端面斜纹承压
        let a_vorholz = g.tv * g.bza;
        let a_eff = (g.tv + END_FACE_SPREAD * s) * g.bza;
        let k_c_alpha = 1.0 + (st.kc90 - 1.0) * s;
        let cos_2a = (2.0 * alpha).cos();
        let coef_a = -0.5 - 0.5 * cos_2a;
        let coef_b = -0.5 + 0.5 * cos_2a;
        let coef_c = 0.5 * (2.0 * alpha).sin();
        let interaction = (coef_a.powi(2)
            + (coef_b * st.fc0k / st.fc90k).powi(2)
            + (coef_c * st.fc0k / st.fvk).powi(2))
        .sqrt();
        let k_alpha = checked_ratio(1.0, interaction, "k_alpha")?;
        let f_c_alpha = k_alpha * k_c_alpha * st.fc0k * a_eff / a_vorholz;
        let h_cal2 = a_vorholz * f_c_alpha / 1000.0;
        let end_face = checked_ratio(h_cal2, c + m * s - mv * (p - m * q), "Fsfcal")?;

        // 底面横纹承压
        let a_g_eff = (g.bg - g.bzal) * (g.hs / s + BASE_SPREAD);
        let v_cal2 = a_g_eff * st.kc90 * st.fc90k / 1000.0;
        let base = checked_ratio(v_cal2, p - m * q, "Fgfcal")?;

        Ok(JointState {
            angle_deg,
            sin: s,
            cos: c,
            t,
            p,
            q,
            m,
            k_alpha,
            end_face_capacity: cfg.design_value(end_face),
            base_capacity: cfg.design_value(base),
        })
    }

    /// 单个荷载下五种验算的利用率（%），按 `FailureMode::ALL` 排列
    pub fn utilization_at(&self, state: &JointState, nd: f64) -> Result<[f64; 5]> {
        let cfg = &self.config;
        let hs = cfg.geometry.hs;
        let lseff = cfg.lseff();
        let actions = self.design_actions(state, nd);

        // 扭转剪应力（N/mm²）
        let w_t = TORSION_MODULUS_FACTOR * hs.powi(2) * lseff;
        let tau_zx = (actions.normal / (lseff * hs) * 1000.0).abs()
            + (actions.moment / w_t * 1000.0).abs();
        let tau_zy = (2.0 * actions.shear / (lseff * hs) * 1000.0).abs()
            + (TORSION_ZY_FACTOR * actions.moment / w_t * 1000.0).abs();

        let torsion_zx = 100.0 * tau_zx / cfg.fvd();
        let torsion_zy = 100.0 * tau_zy / cfg.frsd();
        let druck_stirn = checked_ratio(100.0 * nd, state.end_face_capacity, "Druck_Stirn")?;
        let druck_grund = checked_ratio(100.0 * nd, state.base_capacity, "Druck_Grund")?;

        let tau_vorholz = 1000.0 * nd * state.cos / (cfg.lveff() * cfg.geometry.bza);
        let schub_vorholz = 100.0 * tau_vorholz / cfg.fvd();

        Ok([
            torsion_zx,
            torsion_zy,
            druck_stirn,
            druck_grund,
            schub_vorholz,
        ])
    }

    /// 沿有效承压长度积分的设计内力
    fn design_actions(&self, state: &JointState, nd: f64) -> DesignActions {
        let cfg = &self.config;
        let mh = cfg.eccentricity.mh;
        let mv = cfg.eccentricity.mv;
        let tx = cfg.tx();
        let lseff = cfg.lseff();
        let (s, c, t, m) = (state.sin, state.cos, state.t, state.m);

        // 支座反力
        let h_cal = nd * c + nd * m * s;
        let v_cal = nd * state.p - nd * m * state.q;

        // 榫头根部
        let n_za = -h_cal * c - mh * h_cal * s;
        let v_za = mh * h_cal * c - h_cal * s;
        let m_za = mh * h_cal * t - h_cal * tx;

        // 偏移 lseff / 2 处
        let x = 0.5 * lseff;
        let n_x = n_za - mv * v_cal * c - v_cal * s;
        let v_x = v_za + v_cal * c - mv * v_cal * s;
        let m_x = m_za + v_za * x + v_cal * x * c - mv * v_cal * x * s;

        let normal = 0.5 * (n_za - n_x / 3.0);
        let shear = 0.5 * (v_za - v_x / 3.0);
        let moment = 0.5 * (m_za - m_x / 3.0 + v_za * 0.5 * lseff) - shear * (lseff / 6.0);

        DesignActions {
            normal,
            shear,
            moment,
        }
    }
}

/// 角度必须在 (0°, 90°] 内
fn validate_angle(angle_deg: f64) -> Result<()> {
    if !angle_deg.is_finite() || angle_deg <= 0.0 || angle_deg > 90.0 {
        return Err(ZapfenError::invalid_input(
            "angle",
            angle_deg,
            "angle must be in (0°, 90°]",
        ));
    }
    Ok(())
}

/// 除法，分母为零或结果非有限时报错
fn checked_ratio(num: f64, den: f64, quantity: &str) -> Result<f64> {
    if den == 0.0 {
        return Err(ZapfenError::computation(quantity, "denominator is zero"));
    }
    let value = num / den;
    if !value.is_finite() {
        return Err(ZapfenError::computation(
            quantity,
            format!("non-finite result ({} / {})", num, den),
        ));
    }
    Ok(value)
}
