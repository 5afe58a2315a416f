// ==========================================
// 车轮动平衡配重计算系统 - 输入校验器
// ==========================================
// 职责: Run 1 / Run 2 计算输入的边界校验
// 红线: 校验只发生在API边界, 引擎假定前置条件成立
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::calibration::MAX_MAGNITUDE;
use crate::domain::measurement::{AngularMeasurement, RunOneInput, RunTwoInput};

/// 校验一次测量输入
///
/// 规则:
/// - 幅值: 有限数值, (0, 4.9]
/// - 角度: 有限数值, [0, 360); 恰为 360 时单独提示输入 0
///
/// # 参数
/// - `magnitude_field` / `angle_field`: 字段名 (错误信息用)
pub fn validate_measurement(
    measurement: &AngularMeasurement,
    magnitude_field: &'static str,
    angle_field: &'static str,
) -> ApiResult<()> {
    let magnitude = measurement.magnitude;
    let angle = measurement.angle_deg;

    if !magnitude.is_finite() {
        return Err(ApiError::InvalidInput(format!(
            "{} 不是有效数值",
            magnitude_field
        )));
    }
    if !angle.is_finite() {
        return Err(ApiError::InvalidInput(format!(
            "{} 不是有效数值",
            angle_field
        )));
    }

    if magnitude <= 0.0 || magnitude > MAX_MAGNITUDE {
        return Err(ApiError::MagnitudeOutOfRange {
            field: magnitude_field,
            value: magnitude,
            max: MAX_MAGNITUDE,
        });
    }

    if angle == 360.0 {
        return Err(ApiError::FullCircleAngle { field: angle_field });
    }
    if !(0.0..360.0).contains(&angle) {
        return Err(ApiError::AngleOutOfRange {
            field: angle_field,
            value: angle,
        });
    }

    Ok(())
}

/// 校验 Run 1 输入
pub fn validate_run_one_input(input: &RunOneInput) -> ApiResult<()> {
    validate_measurement(&input.measurement, "u0", "a0")
}

/// 校验 Run 2 输入
pub fn validate_run_two_input(input: &RunTwoInput) -> ApiResult<()> {
    validate_measurement(&input.measurement, "u1", "a1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(magnitude: f64, angle_deg: f64) -> AngularMeasurement {
        AngularMeasurement::new(magnitude, angle_deg)
    }

    #[test]
    fn test_valid_measurement() {
        assert!(validate_measurement(&measurement(2.0, 0.0), "u0", "a0").is_ok());
        assert!(validate_measurement(&measurement(4.9, 359.9), "u0", "a0").is_ok());
    }

    #[test]
    fn test_magnitude_bounds() {
        // 0 与负值拒绝
        assert!(matches!(
            validate_measurement(&measurement(0.0, 10.0), "u0", "a0"),
            Err(ApiError::MagnitudeOutOfRange { field: "u0", .. })
        ));
        // 超过现场上限 4.9 拒绝
        assert!(matches!(
            validate_measurement(&measurement(5.0, 10.0), "u1", "a1"),
            Err(ApiError::MagnitudeOutOfRange { field: "u1", .. })
        ));
    }

    #[test]
    fn test_angle_bounds() {
        // 恰为 360: 专用提示
        assert!(matches!(
            validate_measurement(&measurement(2.0, 360.0), "u0", "a0"),
            Err(ApiError::FullCircleAngle { field: "a0" })
        ));
        // 负角度与越界角度
        assert!(matches!(
            validate_measurement(&measurement(2.0, -0.1), "u0", "a0"),
            Err(ApiError::AngleOutOfRange { field: "a0", .. })
        ));
        assert!(matches!(
            validate_measurement(&measurement(2.0, 400.0), "u0", "a0"),
            Err(ApiError::AngleOutOfRange { field: "a0", .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            validate_measurement(&measurement(f64::NAN, 10.0), "u0", "a0"),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_measurement(&measurement(2.0, f64::INFINITY), "u0", "a0"),
            Err(ApiError::InvalidInput(_))
        ));
    }
}
