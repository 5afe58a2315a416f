// ==========================================
// 车轮动平衡配重计算系统 - 核心库
// ==========================================
// 技术定位: 纯同步确定性计算核心
// 系统定位: 决策支持系统 (人工最终控制权:
//           系统给出配重方案, 操作员安装)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 现场标定数据
pub mod config;

// 引擎层 - 计算引擎
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{PercentMode, RotationDirection};

// 领域实体
pub use domain::{
    AngularMeasurement, CombinationEvaluation, HoleSpread, PlacementRow, RunOneInput,
    RunOneResult, RunTwoInput, SearchOutcome, Solution, SolutionPlacement, WeightCombination,
    WeightUsage,
};

// 引擎
pub use engine::{
    BalancingOrchestrator, CorrectionVector, HoleMapper, RunGeometryEngine, RunOneOutcome,
    RunTwoOutcome, WeightSearchEngine,
};

// API
pub use api::{ApiError, ApiResult, BalancingApi, RunOneReport, RunTwoReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车轮动平衡配重计算系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
