// ==========================================
// 车轮动平衡配重计算系统 - 平衡计算API
// ==========================================
// 职责: 面向调用方的业务接口
//       校验输入 → 编排引擎 → 装配放置报告
// 红线: Run 1 快照由调用方持有并显式传入 Run 2
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{validate_run_one_input, validate_run_two_input};
use crate::config::calibration::scaling_factor;
use crate::domain::combination::Solution;
use crate::domain::measurement::{RunOneInput, RunOneResult, RunTwoInput};
use crate::domain::placement::SolutionPlacement;
use crate::engine::hole_mapper::HoleMapper;
use crate::engine::orchestrator::BalancingOrchestrator;
use crate::engine::run_geometry::CorrectionVector;
use serde::Serialize;
use tracing::{info, instrument};

// ==========================================
// RunOneReport / RunTwoReport - 计算报告
// ==========================================

/// Run 1 计算报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOneReport {
    /// 供 Run 2 使用的结果快照
    pub snapshot: RunOneResult,
    /// 中心孔位展示串 (如 "26")
    pub hole_path: String,
    /// 主方案放置
    pub primary: SolutionPlacement,
    /// 备选方案放置
    pub secondary: Option<SolutionPlacement>,
}

/// Run 2 计算报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunTwoReport {
    /// 修正向量
    pub correction: CorrectionVector,
    /// 修正后的目标配重 w2 (克)
    pub target_weight_g: f64,
    /// 孔位轨迹展示串 (如 "18 → 13")
    pub hole_path: String,
    /// 主方案放置
    pub primary: SolutionPlacement,
    /// 备选方案放置
    pub secondary: Option<SolutionPlacement>,
}

// ==========================================
// BalancingApi - 平衡计算API
// ==========================================

pub struct BalancingApi {
    orchestrator: BalancingOrchestrator,
    hole_mapper: HoleMapper,
}

impl BalancingApi {
    pub fn new() -> Self {
        Self {
            orchestrator: BalancingOrchestrator::new(),
            hole_mapper: HoleMapper::new(),
        }
    }

    // ==========================================
    // Run 1
    // ==========================================

    /// 执行 Run 1 计算并装配放置报告
    ///
    /// # 返回
    /// - `Ok(RunOneReport)`: 含主方案(必有)与备选方案(可缺)
    /// - `Err(ApiError::NoFeasibleCombination)`: 无可行组合,
    ///   调用方应提示调整 u0
    #[instrument(skip(self))]
    pub fn calculate_run_one(&self, input: &RunOneInput) -> ApiResult<RunOneReport> {
        validate_run_one_input(input)?;

        let outcome = self.orchestrator.run_one(input).ok_or_else(|| {
            ApiError::NoFeasibleCombination {
                target_weight_g: input.measurement.magnitude * scaling_factor(input.mode),
                hint: "请调整 u0 后重试".to_string(),
            }
        })?;

        let snapshot = outcome.snapshot;
        let primary = self.assemble_placement(
            &outcome.primary,
            snapshot.center_hole,
            snapshot.target_weight_g,
        );
        let secondary = outcome.secondary.as_ref().map(|solution| {
            self.assemble_placement(solution, snapshot.center_hole, snapshot.target_weight_g)
        });

        info!(
            center_hole = snapshot.center_hole,
            total_weight_g = primary.total_weight_g,
            "Run 1 报告装配完成"
        );

        Ok(RunOneReport {
            hole_path: snapshot.center_hole.to_string(),
            snapshot,
            primary,
            secondary,
        })
    }

    // ==========================================
    // Run 2
    // ==========================================

    /// 执行 Run 2 计算并装配放置报告
    ///
    /// # 参数
    /// - `run_one`: Run 1 结果快照 (由调用方持有)
    /// - `input`: 试测量 (u1, a1)
    ///
    /// # 返回
    /// - `Ok(RunTwoReport)`: 含修正向量、孔位轨迹与方案放置
    /// - `Err(ApiError::NoFeasibleCombination)`: 无可行组合,
    ///   调用方应提示调整 a1
    #[instrument(skip(self, run_one))]
    pub fn calculate_run_two(
        &self,
        run_one: &RunOneResult,
        input: &RunTwoInput,
    ) -> ApiResult<RunTwoReport> {
        validate_run_two_input(input)?;

        let outcome = self.orchestrator.run_two(run_one, input).ok_or_else(|| {
            ApiError::NoFeasibleCombination {
                target_weight_g: run_one.target_weight_g,
                hint: "请调整 a1 后重试".to_string(),
            }
        })?;

        let primary = self.assemble_placement(
            &outcome.primary,
            outcome.shifted_hole,
            outcome.target_weight_g,
        );
        let secondary = outcome.secondary.as_ref().map(|solution| {
            self.assemble_placement(solution, outcome.shifted_hole, outcome.target_weight_g)
        });

        info!(
            initial_hole = outcome.initial_hole,
            shifted_hole = outcome.shifted_hole,
            direction = %outcome.correction.direction,
            "Run 2 报告装配完成"
        );

        Ok(RunTwoReport {
            correction: outcome.correction,
            target_weight_g: outcome.target_weight_g,
            hole_path: format!("{} → {}", outcome.initial_hole, outcome.shifted_hole),
            primary,
            secondary,
        })
    }

    // ==========================================
    // 装配辅助
    // ==========================================

    /// 按方案长度展开孔位并装配放置数据
    fn assemble_placement(
        &self,
        solution: &Solution,
        center_hole: u32,
        target_weight_g: f64,
    ) -> SolutionPlacement {
        let spread = self
            .hole_mapper
            .spread_holes(center_hole, solution.combination.len());
        SolutionPlacement::assemble(solution, &spread, target_weight_g)
    }
}

impl Default for BalancingApi {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::measurement::AngularMeasurement;
    use crate::domain::types::PercentMode;

    fn api() -> BalancingApi {
        BalancingApi::new()
    }

    fn run_one_input(mode: PercentMode, u0: f64, a0: f64) -> RunOneInput {
        RunOneInput {
            mode,
            measurement: AngularMeasurement::new(u0, a0),
        }
    }

    #[test]
    fn test_run_one_report_shape() {
        let report = api()
            .calculate_run_one(&run_one_input(PercentMode::P99, 2.0, 0.0))
            .expect("u0=2 应有方案");

        assert_eq!(report.hole_path, "26");
        assert_eq!(report.primary.center_hole, 26);
        // 放置行数与组合长度一致, 且恰有一个中心行
        let center_rows = report.primary.rows.iter().filter(|r| r.is_center).count();
        assert_eq!(center_rows, 1);
    }

    #[test]
    fn test_run_one_rejects_invalid_input() {
        let err = api()
            .calculate_run_one(&run_one_input(PercentMode::P99, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, ApiError::MagnitudeOutOfRange { .. }));

        let err = api()
            .calculate_run_one(&run_one_input(PercentMode::P99, 2.0, 360.0))
            .unwrap_err();
        assert!(matches!(err, ApiError::FullCircleAngle { .. }));
    }

    #[test]
    fn test_run_one_infeasible_is_recoverable_error() {
        // u0 极小 → 无可行组合, 必须是 NoFeasibleCombination 而非 panic
        let err = api()
            .calculate_run_one(&run_one_input(PercentMode::P99, 0.01, 0.0))
            .unwrap_err();
        assert!(matches!(err, ApiError::NoFeasibleCombination { .. }));
    }

    #[test]
    fn test_run_two_hole_path() {
        let run1 = api()
            .calculate_run_one(&run_one_input(PercentMode::P99, 4.2, 80.0))
            .expect("应有方案");

        let run2 = api()
            .calculate_run_two(
                &run1.snapshot,
                &RunTwoInput {
                    measurement: AngularMeasurement::new(3.5, 148.0),
                },
            )
            .expect("应有方案");

        // 标定点: 18 → 13 (顺时针5孔)
        assert_eq!(run2.hole_path, "18 → 13");
        assert_eq!(run2.primary.center_hole, 13);
    }
}
