// ==========================================
// 车轮动平衡配重计算系统 - 引擎编排器
// ==========================================
// 用途: 协调孔位映射 / 组合搜索 / 测量几何三个
//       引擎, 实现 Run 1 与 Run 2 两阶段计算流程
// ==========================================
// 红线: Run 1 结果以不可变快照返回, Run 2 只接收
//       显式传入的快照, 编排器自身不保存会话状态
// ==========================================

use crate::config::calibration::scaling_factor;
use crate::domain::combination::Solution;
use crate::domain::measurement::{RunOneInput, RunOneResult, RunTwoInput};
use crate::engine::hole_mapper::HoleMapper;
use crate::engine::run_geometry::{CorrectionVector, RunGeometryEngine};
use crate::engine::weight_search::WeightSearchEngine;
use chrono::Utc;
use tracing::{debug, info};

// ==========================================
// RunOneOutcome / RunTwoOutcome - 阶段结果
// ==========================================

/// Run 1 计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct RunOneOutcome {
    /// 供 Run 2 使用的结果快照
    pub snapshot: RunOneResult,
    /// 主方案
    pub primary: Solution,
    /// 备选方案
    pub secondary: Option<Solution>,
}

/// Run 2 计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct RunTwoOutcome {
    /// 修正向量
    pub correction: CorrectionVector,
    /// 修正后的目标配重 w2 (克)
    pub target_weight_g: f64,
    /// Run 1 的中心孔位
    pub initial_hole: u32,
    /// 平移后的新中心孔位
    pub shifted_hole: u32,
    /// 主方案
    pub primary: Solution,
    /// 备选方案
    pub secondary: Option<Solution>,
}

// ==========================================
// BalancingOrchestrator - 引擎编排器
// ==========================================

pub struct BalancingOrchestrator {
    hole_mapper: HoleMapper,
    weight_search: WeightSearchEngine,
    run_geometry: RunGeometryEngine,
}

impl BalancingOrchestrator {
    pub fn new() -> Self {
        Self {
            hole_mapper: HoleMapper::new(),
            weight_search: WeightSearchEngine::new(),
            run_geometry: RunGeometryEngine::new(),
        }
    }

    /// 基准幅值对应的允许偏差 (克)
    ///
    /// u0 ≥ 4 时放宽到 2, 否则 1
    fn allowed_deviation(u0: f64) -> f64 {
        if u0 >= 4.0 {
            2.0
        } else {
            1.0
        }
    }

    // ==========================================
    // Run 1 流程
    // ==========================================

    /// 执行 Run 1 计算
    ///
    /// 流程:
    /// 1) w1 = u0 × 档位换算系数
    /// 2) a0 按档位查表得中心孔位
    /// 3) 搜索 w1 的配重组合
    ///
    /// # 返回
    /// - `Some(RunOneOutcome)`: 找到主方案
    /// - `None`: 约束下无可行组合 (可恢复, 提示调整 u0)
    pub fn run_one(&self, input: &RunOneInput) -> Option<RunOneOutcome> {
        let u0 = input.measurement.magnitude;
        let a0 = input.measurement.angle_deg;

        let target_weight_g = u0 * scaling_factor(input.mode);
        let center_hole = self.hole_mapper.map_angle_to_hole(a0, input.mode);

        debug!(
            mode = %input.mode,
            target_weight_g,
            center_hole,
            "Run 1: 目标配重与中心孔位已定"
        );

        let outcome = self.weight_search.search(
            target_weight_g,
            input.mode,
            u0,
            Self::allowed_deviation(u0),
        );
        let primary = outcome.primary?;

        info!(target_weight_g, center_hole, "Run 1 计算完成");

        Some(RunOneOutcome {
            snapshot: RunOneResult {
                mode: input.mode,
                u0,
                a0,
                target_weight_g,
                center_hole,
                computed_at: Utc::now(),
            },
            primary,
            secondary: outcome.secondary,
        })
    }

    // ==========================================
    // Run 2 流程
    // ==========================================

    /// 执行 Run 2 计算
    ///
    /// 流程:
    /// 1) 由两次测量求修正向量 (R, 转角, 转向)
    /// 2) w2 = w1 × u0 / R (R = 0 时以 1 代入)
    /// 3) Run 1 中心孔按转角/转向平移得新孔位
    /// 4) 搜索 w2 的配重组合
    ///
    /// # 参数
    /// - `run_one`: Run 1 结果快照 (调用方显式传入)
    /// - `input`: 试测量 (u1, a1)
    ///
    /// # 返回
    /// - `Some(RunTwoOutcome)`: 找到主方案
    /// - `None`: 约束下无可行组合 (可恢复, 提示调整 a1)
    pub fn run_two(&self, run_one: &RunOneResult, input: &RunTwoInput) -> Option<RunTwoOutcome> {
        let u1 = input.measurement.magnitude;
        let a1 = input.measurement.angle_deg;

        let correction = self
            .run_geometry
            .compute_correction(run_one.u0, run_one.a0, u1, a1);

        let target_weight_g = self.run_geometry.corrected_target_weight(
            run_one.target_weight_g,
            run_one.u0,
            correction.magnitude,
        );

        let initial_hole = self.hole_mapper.map_angle_to_hole(run_one.a0, run_one.mode);
        let shifted_hole = self.run_geometry.shifted_hole(initial_hole, &correction);

        debug!(
            magnitude = correction.magnitude,
            angle_deg = correction.angle_deg,
            direction = %correction.direction,
            target_weight_g,
            initial_hole,
            shifted_hole,
            "Run 2: 修正向量与新孔位已定"
        );

        let outcome = self.weight_search.search(
            target_weight_g,
            run_one.mode,
            run_one.u0,
            Self::allowed_deviation(run_one.u0),
        );
        let primary = outcome.primary?;

        info!(target_weight_g, shifted_hole, "Run 2 计算完成");

        Some(RunTwoOutcome {
            correction,
            target_weight_g,
            initial_hole,
            shifted_hole,
            primary,
            secondary: outcome.secondary,
        })
    }
}

impl Default for BalancingOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
