// ==========================================
// 车轮动平衡配重计算系统 - 领域类型定义
// ==========================================
// 职责: 标定档位与旋转方向的基础类型
// 红线: 类型层不含引擎逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 标定档位 (Percent Mode)
// ==========================================
// 平衡机的两套现场标定档位(95%/99%),
// 同时决定目标配重换算系数与孔位查找表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PercentMode {
    P95, // 95% 档
    P99, // 99% 档
}

impl PercentMode {
    /// 从百分比数值解析标定档位
    ///
    /// 规则: 95 → P95, 其余一律回落到 P99 档
    /// (与现场操作面板的默认档位一致)
    pub fn from_percent(percent: u32) -> Self {
        if percent == 95 {
            PercentMode::P95
        } else {
            PercentMode::P99
        }
    }

    /// 档位对应的百分比数值
    pub fn as_percent(&self) -> u32 {
        match self {
            PercentMode::P95 => 95,
            PercentMode::P99 => 99,
        }
    }
}

impl fmt::Display for PercentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentMode::P95 => write!(f, "95"),
            PercentMode::P99 => write!(f, "99"),
        }
    }
}

// ==========================================
// 旋转方向 (Rotation Direction)
// ==========================================
// Run 2 修正时孔位平移的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationDirection {
    Cw,   // 顺时针
    Ccw,  // 逆时针
    None, // 无需平移
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationDirection::Cw => write!(f, "CW"),
            RotationDirection::Ccw => write!(f, "CCW"),
            RotationDirection::None => write!(f, "NONE"),
        }
    }
}
