// ==========================================
// 车轮动平衡配重计算系统 - 测量与会话实体
// ==========================================
// 职责: 不平衡测量值与 Run 1 结果快照
// 红线: Run 1 快照为不可变值对象, 由调用方显式
//       传入 Run 2, 核心层不保存任何跨调用状态
// ==========================================

use crate::domain::types::PercentMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// AngularMeasurement - 不平衡测量值
// ==========================================

/// 一次不平衡测量: 幅值 + 角度
///
/// - `magnitude`: 不平衡幅值 (非负, 现场实用上限 4.9)
/// - `angle_deg`: 角度, [0, 360) 度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularMeasurement {
    pub magnitude: f64,
    pub angle_deg: f64,
}

impl AngularMeasurement {
    pub fn new(magnitude: f64, angle_deg: f64) -> Self {
        Self {
            magnitude,
            angle_deg,
        }
    }
}

// ==========================================
// RunOneInput / RunTwoInput - 计算输入
// ==========================================

/// Run 1 计算输入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunOneInput {
    /// 标定档位
    pub mode: PercentMode,
    /// 基准测量 (u0, a0)
    pub measurement: AngularMeasurement,
}

/// Run 2 计算输入 (试配重后的第二次测量)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunTwoInput {
    /// 试测量 (u1, a1)
    pub measurement: AngularMeasurement,
}

// ==========================================
// RunOneResult - Run 1 结果快照
// ==========================================

/// Run 1 成功后的结果快照
///
/// 生命周期: Run 1 成功时创建, Run 2 计算时由调用方显式传入,
/// 会话结束即丢弃, 不做任何持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOneResult {
    /// 标定档位
    pub mode: PercentMode,
    /// 基准测量值 u0
    pub u0: f64,
    /// 基准角度 a0 (度)
    pub a0: f64,
    /// 换算后的目标配重 w1 (克)
    pub target_weight_g: f64,
    /// 中心孔位 [1, 38]
    pub center_hole: u32,
    /// 快照生成时间
    pub computed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_one_result_roundtrip() {
        let snapshot = RunOneResult {
            mode: PercentMode::P99,
            u0: 2.0,
            a0: 45.0,
            target_weight_g: 57.2,
            center_hole: 21,
            computed_at: Utc::now(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: RunOneResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
