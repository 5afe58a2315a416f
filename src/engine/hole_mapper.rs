// ==========================================
// 车轮动平衡配重计算系统 - 孔位映射引擎
// ==========================================
// 职责: 角度 → 孔位映射, 以及围绕中心孔的
//       对称孔位展开
// 输入: 角度(度) / 中心孔 + 组合长度
// 输出: [1, 38] 内的孔位
// ==========================================

use crate::config::calibration::{
    hole_table, ANGLE_RANGES, CALIBRATION_OFFSET, TOTAL_HOLES,
};
use crate::domain::placement::HoleSpread;
use crate::domain::types::PercentMode;
use tracing::instrument;

// ==========================================
// HoleMapper - 孔位映射引擎
// ==========================================
pub struct HoleMapper {
    // 无状态引擎, 只依赖标定表
}

impl HoleMapper {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 角度映射到孔位
    ///
    /// 规则:
    /// 1) 角度 360 归一化为 0
    /// 2) 按38个实测角度区间查表 (区间覆盖整个 [0, 360))
    /// 3) 区间未命中时回退到均分公式:
    ///    round(angle / (360/38)) + 1, 再加标定偏移 8.56, 模回绕到 [1, 38]
    ///
    /// # 参数
    /// - `angle_deg`: 角度, 期望 [0, 360] (360 视为 0)
    /// - `mode`: 标定档位 (决定孔位查找表)
    ///
    /// # 返回
    /// [1, 38] 内的孔位
    pub fn map_angle_to_hole(&self, angle_deg: f64, mode: PercentMode) -> u32 {
        let angle = if angle_deg == 360.0 { 0.0 } else { angle_deg };

        let table = hole_table(mode);
        for (i, &(lo, hi)) in ANGLE_RANGES.iter().enumerate() {
            if angle >= lo && angle < hi {
                return table[i];
            }
        }

        // 区间表覆盖 [0, 360), 此分支仅对越界输入兜底
        let degrees_per_hole = 360.0 / TOTAL_HOLES as f64;
        let raw = (angle / degrees_per_hole).round() + 1.0;
        let shifted = (raw + CALIBRATION_OFFSET).round() as i64;
        wrap_hole(shifted)
    }

    /// 围绕中心孔展开连续孔位序列
    ///
    /// 序列长度为 `length`, 下标 `length / 2` 处为中心孔,
    /// 两侧各向外延伸, 越界孔位模回绕到 [1, 38]
    ///
    /// # 参数
    /// - `center_hole`: 中心孔 [1, 38]
    /// - `length`: 组合长度 (≥ 1)
    #[instrument(skip(self))]
    pub fn spread_holes(&self, center_hole: u32, length: usize) -> HoleSpread {
        let half = length / 2;
        let mut holes = Vec::with_capacity(length);

        for i in 0..length {
            let offset = i as i64 - half as i64;
            holes.push(wrap_hole(center_hole as i64 + offset));
        }

        HoleSpread {
            holes,
            center_index: half,
        }
    }
}

impl Default for HoleMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// 孔位模回绕: 任意整数 → [1, 38]
pub(crate) fn wrap_hole(hole: i64) -> u32 {
    ((hole - 1).rem_euclid(TOTAL_HOLES as i64) + 1) as u32
}
