// ==========================================
// 车轮动平衡配重计算系统 - 配置层
// ==========================================
// 职责: 固定现场标定数据 (编译期常量)
// 说明: 本系统的"配置"是平衡机标定数据,
//       不存在运行期可变配置
// ==========================================

pub mod calibration;

// 重导出常用标定常量
pub use calibration::{
    hole_table, scaling_factor, ANGLE_RANGES, CALIBRATION_OFFSET, DEGREES_PER_HOLE_APPROX,
    HOLE_TABLE_95, HOLE_TABLE_99, MAX_MAGNITUDE, MAX_P01_COUNT, TOTAL_HOLES, WIDENED_DEVIATION_G,
};
