// ==========================================
// 车轮动平衡配重计算系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 把引擎层的"无方案"与
//       非法输入转换为可解释的业务错误
// 红线: 引擎层自身不抛错(无方案即 None),
//       错误转换只发生在API边界
// ==========================================

use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 测量幅值越界
    #[error("幅值越界: {field}={value}, 允许范围 (0, {max}]")]
    MagnitudeOutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// 角度越界
    #[error("角度越界: {field}={value}, 允许范围 [0, 360)")]
    AngleOutOfRange { field: &'static str, value: f64 },

    /// 角度恰为 360 (应输入 0)
    #[error("角度 {field} 为 360, 请输入 0")]
    FullCircleAngle { field: &'static str },

    // ==========================================
    // 业务结果错误
    // ==========================================
    /// 约束下无可行配重组合 (可恢复: 提示调整输入)
    #[error("无可行配重组合: 目标配重 {target_weight_g:.2} 克。{hint}")]
    NoFeasibleCombination { target_weight_g: f64, hint: String },

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
