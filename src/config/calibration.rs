// ==========================================
// 车轮动平衡配重计算系统 - 现场标定数据
// ==========================================
// 职责: 平衡机的固定标定数据(编译期常量)
// 依据: 现场标定记录, 38孔平衡环
// 红线: 标定表为只读数据, 引擎不得修改
// ==========================================

use crate::domain::types::PercentMode;

/// 平衡环孔位总数
pub const TOTAL_HOLES: u32 = 38;

/// 均分回退公式的标定偏移量 (孔)
pub const CALIBRATION_OFFSET: f64 = 8.56;

/// 每孔近似角度 (度), Run 2 孔位平移用
pub const DEGREES_PER_HOLE_APPROX: f64 = 9.47;

/// 最轻配重块(P01)单方案允许的最大数量
pub const MAX_P01_COUNT: usize = 4;

/// 测量幅值的现场输入上限
pub const MAX_MAGNITUDE: f64 = 4.9;

/// 偏差搜索失败后的放宽上限 (克)
pub const WIDENED_DEVIATION_G: f64 = 2.0;

// ==========================================
// 目标配重换算系数
// ==========================================

/// 标定档位对应的目标配重换算系数
///
/// w1 = u0 × factor
pub fn scaling_factor(mode: PercentMode) -> f64 {
    match mode {
        PercentMode::P95 => 32.2,
        PercentMode::P99 => 28.6,
    }
}

// ==========================================
// 角度区间 → 孔位查找表
// ==========================================
// [0, 360) 划分为38个非均匀区间(实测标定),
// 每个区间按档位映射到固定孔位

/// 角度区间表: [下界, 上界) (度)
pub const ANGLE_RANGES: [(f64, f64); 38] = [
    (0.0, 10.0),
    (10.0, 19.0),
    (19.0, 29.0),
    (29.0, 38.0),
    (38.0, 48.0),
    (48.0, 57.0),
    (57.0, 67.0),
    (67.0, 76.0),
    (76.0, 86.0),
    (86.0, 95.0),
    (95.0, 105.0),
    (105.0, 114.0),
    (114.0, 124.0),
    (124.0, 133.0),
    (133.0, 143.0),
    (143.0, 152.0),
    (152.0, 162.0),
    (162.0, 171.0),
    (171.0, 181.0),
    (181.0, 190.0),
    (190.0, 199.0),
    (199.0, 209.0),
    (209.0, 218.0),
    (218.0, 228.0),
    (228.0, 237.0),
    (237.0, 247.0),
    (247.0, 256.0),
    (256.0, 266.0),
    (266.0, 275.0),
    (275.0, 285.0),
    (285.0, 294.0),
    (294.0, 304.0),
    (304.0, 313.0),
    (313.0, 323.0),
    (323.0, 332.0),
    (332.0, 342.0),
    (342.0, 351.0),
    (351.0, 360.0),
];

/// 95% 档孔位表 (与区间表同下标)
pub const HOLE_TABLE_95: [u32; 38] = [
    25, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 38,
    37, 36, 35, 34, 33, 32, 31, 30, 29, 28, 27, 26,
];

/// 99% 档孔位表 (与区间表同下标)
pub const HOLE_TABLE_99: [u32; 38] = [
    26, 25, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
    38, 37, 36, 35, 34, 33, 32, 31, 30, 29, 28, 27,
];

/// 按档位取孔位查找表
pub fn hole_table(mode: PercentMode) -> &'static [u32; 38] {
    match mode {
        PercentMode::P95 => &HOLE_TABLE_95,
        PercentMode::P99 => &HOLE_TABLE_99,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_cover_full_circle() {
        // 区间首尾相接, 覆盖 [0, 360)
        assert_eq!(ANGLE_RANGES[0].0, 0.0);
        assert_eq!(ANGLE_RANGES[37].1, 360.0);
        for i in 1..ANGLE_RANGES.len() {
            assert_eq!(ANGLE_RANGES[i].0, ANGLE_RANGES[i - 1].1);
        }
    }

    #[test]
    fn test_hole_tables_are_permutations() {
        // 两套孔位表都必须是 1..38 的排列
        for table in [&HOLE_TABLE_95, &HOLE_TABLE_99] {
            let mut seen = [false; 38];
            for &h in table.iter() {
                assert!((1..=38).contains(&h));
                assert!(!seen[(h - 1) as usize], "孔位 {} 重复", h);
                seen[(h - 1) as usize] = true;
            }
        }
    }

    #[test]
    fn test_scaling_factors() {
        assert_eq!(scaling_factor(PercentMode::P95), 32.2);
        assert_eq!(scaling_factor(PercentMode::P99), 28.6);
    }
}
