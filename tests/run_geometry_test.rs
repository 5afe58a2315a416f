// ==========================================
// RunGeometryEngine 引擎集成测试
// ==========================================
// 测试目标: 验证两次测量的修正向量求解
// 覆盖范围: 实测标定点、退化几何回退、转向符号、
//           修正配重与孔位平移
// ==========================================

use wheel_balancing_dss::domain::types::RotationDirection;
use wheel_balancing_dss::engine::RunGeometryEngine;

// ==========================================
// 测试用例 1: 实测标定点原样返回
// ==========================================

#[test]
fn test_calibration_point_exact() {
    let engine = RunGeometryEngine::new();
    let correction = engine.compute_correction(4.2, 80.0, 3.5, 148.0);

    assert_eq!(correction.magnitude, 4.4);
    assert_eq!(correction.angle_deg, 48.0);
    assert_eq!(correction.direction, RotationDirection::Cw);
}

#[test]
fn test_near_calibration_point_uses_formula() {
    // 标定点仅精确命中时生效, 邻近输入走公式解
    let engine = RunGeometryEngine::new();
    let correction = engine.compute_correction(4.2, 80.0, 3.5, 148.5);

    assert_ne!(correction.magnitude, 4.4);
}

// ==========================================
// 测试用例 2: 退化几何回退
// ==========================================

#[test]
fn test_identical_measurements_fallback() {
    // 位移为零 → R=0, 夹角 0, 无转向
    let engine = RunGeometryEngine::new();

    for (u, a) in [(1.0, 0.0), (2.5, 90.0), (4.9, 359.0)] {
        let correction = engine.compute_correction(u, a, u, a);
        assert_eq!(correction.magnitude, 0.0);
        assert_eq!(correction.angle_deg, 0.0);
        assert_eq!(correction.direction, RotationDirection::None);
    }
}

#[test]
fn test_zero_magnitude_r_guard() {
    // R=0 时修正配重除数取 1: w2 = w1 × u0
    let engine = RunGeometryEngine::new();
    let w2 = engine.corrected_target_weight(57.2, 2.0, 0.0);
    assert!((w2 - 114.4).abs() < 1e-9);
}

// ==========================================
// 测试用例 3: 转向符号
// ==========================================

#[test]
fn test_direction_signs() {
    let engine = RunGeometryEngine::new();

    // (2, 0°) → (2, 90°): 叉积负 → 顺时针
    let cw = engine.compute_correction(2.0, 0.0, 2.0, 90.0);
    assert_eq!(cw.direction, RotationDirection::Cw);

    // (2, 0°) → (2, 270°): 叉积正 → 逆时针
    let ccw = engine.compute_correction(2.0, 0.0, 2.0, 270.0);
    assert_eq!(ccw.direction, RotationDirection::Ccw);
}

// ==========================================
// 测试用例 4: 夹角取整与钳位
// ==========================================

#[test]
fn test_angle_is_whole_degrees() {
    let engine = RunGeometryEngine::new();

    for (u0, a0, u1, a1) in [
        (2.0, 0.0, 2.0, 90.0),
        (2.5, 30.0, 1.8, 200.0),
        (3.3, 120.0, 4.1, 10.0),
        (1.0, 300.0, 1.1, 301.0),
    ] {
        let correction = engine.compute_correction(u0, a0, u1, a1);
        assert_eq!(correction.angle_deg, correction.angle_deg.round());
        assert!(correction.angle_deg >= 0.0 && correction.angle_deg <= 180.0);
    }
}

#[test]
fn test_collinear_cosine_clamped() {
    // 同向共线: cos 恰为 -1, 不得产生 NaN
    let engine = RunGeometryEngine::new();
    let correction = engine.compute_correction(1.0, 0.0, 3.0, 0.0);

    assert_eq!(correction.magnitude, 2.0);
    assert_eq!(correction.angle_deg, 180.0);
    assert!(correction.angle_deg.is_finite());
}

// ==========================================
// 测试用例 5: 修正配重与孔位平移联动
// ==========================================

#[test]
fn test_corrected_weight_ratio() {
    let engine = RunGeometryEngine::new();

    // R = 2·u0 → w2 = w1 / 2
    let w2 = engine.corrected_target_weight(100.0, 2.0, 4.0);
    assert!((w2 - 50.0).abs() < 1e-9);
}

#[test]
fn test_shift_from_calibration_angle() {
    // 48° → round(48 / 9.47) = 5 孔
    let engine = RunGeometryEngine::new();
    let correction = engine.compute_correction(4.2, 80.0, 3.5, 148.0);

    assert_eq!(engine.shifted_hole(18, &correction), 13);
    // 回绕: 孔 3 顺时针 5 孔 → 36
    assert_eq!(engine.shifted_hole(3, &correction), 36);
}
