// ==========================================
// 车轮动平衡配重计算系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与派生评估值
// 红线: 不含引擎逻辑, 不含展示逻辑
// ==========================================

pub mod catalog;
pub mod combination;
pub mod measurement;
pub mod placement;
pub mod types;

// 重导出核心类型
pub use catalog::{WeightSpec, CATALOG_SIZE, P01_INDEX, WEIGHT_LABELS, WEIGHT_VALUES_G};
pub use combination::{CombinationEvaluation, SearchOutcome, Solution, WeightCombination};
pub use measurement::{AngularMeasurement, RunOneInput, RunOneResult, RunTwoInput};
pub use placement::{HoleSpread, PlacementRow, SolutionPlacement, WeightUsage};
pub use types::{PercentMode, RotationDirection};
