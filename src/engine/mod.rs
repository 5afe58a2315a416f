// ==========================================
// 车轮动平衡配重计算系统 - 引擎层
// ==========================================
// 职责: 实现计算引擎, 全部为无状态纯函数引擎
// 红线: 引擎不做输入校验(API层职责), 无方案用
//       None 表达, 引擎永不 panic
// ==========================================

pub mod hole_mapper;
pub mod orchestrator;
pub mod run_geometry;
pub mod weight_search;

// 重导出核心引擎
pub use hole_mapper::HoleMapper;
pub use orchestrator::{BalancingOrchestrator, RunOneOutcome, RunTwoOutcome};
pub use run_geometry::{CorrectionVector, RunGeometryEngine};
pub use weight_search::WeightSearchEngine;
