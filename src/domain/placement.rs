// ==========================================
// 车轮动平衡配重计算系统 - 孔位放置读模型
// ==========================================
// 职责: 面向展示层的放置数据(孔位/克重/编号),
//       不含任何渲染逻辑
// ==========================================

use crate::domain::catalog::{CATALOG_SIZE, WEIGHT_LABELS};
use crate::domain::combination::Solution;
use serde::Serialize;

// ==========================================
// HoleSpread - 孔位展开
// ==========================================

/// 以中心孔为对称轴展开的连续孔位序列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoleSpread {
    /// 孔位序列, 每个在 [1, 38]
    pub holes: Vec<u32>,
    /// 中心孔在序列中的位置
    pub center_index: usize,
}

// ==========================================
// PlacementRow - 单块放置行
// ==========================================

/// 单个配重块的放置行: 孔位 + 克重 + 编号
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementRow {
    /// 孔位 [1, 38]
    pub hole_no: u32,
    /// 克重
    pub weight_g: f64,
    /// 配重块编号 (P01..P06)
    pub label: &'static str,
    /// 是否中心孔
    pub is_center: bool,
}

// ==========================================
// WeightUsage - 配重用量汇总
// ==========================================

/// 按编号统计的配重块用量
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightUsage {
    /// (编号, 数量), 仅含数量 > 0 的条目, 按编号从重到轻
    pub counts: Vec<(&'static str, usize)>,
}

impl WeightUsage {
    /// 统计组合中各编号配重块的数量
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut per_label = [0usize; CATALOG_SIZE];
        for &idx in indices {
            per_label[idx] += 1;
        }

        let counts = per_label
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| (WEIGHT_LABELS[i], c))
            .collect();

        Self { counts }
    }
}

// ==========================================
// SolutionPlacement - 方案放置读模型
// ==========================================

/// 单个方案的完整放置数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionPlacement {
    /// 中心孔位
    pub center_hole: u32,
    /// 逐块放置行 (与组合顺序一致)
    pub rows: Vec<PlacementRow>,
    /// 配重用量汇总
    pub usage: WeightUsage,
    /// 目标配重 (克)
    pub target_weight_g: f64,
    /// 实际总配重 (克)
    pub total_weight_g: f64,
    /// 带符号偏差 (克)
    pub deviation_g: f64,
}

impl SolutionPlacement {
    /// 由方案与孔位展开装配放置数据
    ///
    /// # 参数
    /// - `solution`: 配重方案
    /// - `spread`: 与组合等长的孔位展开
    /// - `target_weight_g`: 目标配重
    pub fn assemble(solution: &Solution, spread: &HoleSpread, target_weight_g: f64) -> Self {
        debug_assert_eq!(spread.holes.len(), solution.combination.len());

        let weights = solution.combination.weights_g();
        let labels = solution.combination.labels();

        let rows = spread
            .holes
            .iter()
            .enumerate()
            .map(|(i, &hole_no)| PlacementRow {
                hole_no,
                weight_g: weights[i],
                label: labels[i],
                is_center: i == spread.center_index,
            })
            .collect();

        Self {
            center_hole: spread.holes[spread.center_index],
            rows,
            usage: WeightUsage::from_indices(solution.combination.indices()),
            target_weight_g,
            total_weight_g: solution.total_weight_g,
            deviation_g: solution.deviation_g,
        }
    }
}
