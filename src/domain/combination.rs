// ==========================================
// 车轮动平衡配重计算系统 - 配重组合实体
// ==========================================
// 职责: 回文配重组合及其派生评估值
// 红线: 组合以目录下标表示, 去重用值相等比较,
//       不做序列化字符串比较
// ==========================================

use crate::domain::catalog::{self, CATALOG_SIZE, P01_INDEX};
use serde::{Deserialize, Serialize};

// ==========================================
// WeightCombination - 回文配重组合
// ==========================================

/// 回文配重组合
///
/// 结构: `[side_k .. side_1, center, side_1 .. side_k]`,
/// 长度恒为奇数, 关于中心镜像对称。
/// 内部存储目录下标序列, 相等性即逐元素值相等。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightCombination {
    /// 完整下标序列 (含镜像)
    indices: Vec<usize>,
}

impl WeightCombination {
    /// 由中心块与单侧块序列构造完整回文组合
    ///
    /// # 参数
    /// - `center_index`: 中心块目录下标
    /// - `side_indices`: 单侧块下标序列 (靠近中心在前)
    ///
    /// # 返回
    /// `[side_k..side_1, center, side_1..side_k]` 形式的组合
    pub fn from_center_and_sides(center_index: usize, side_indices: &[usize]) -> Self {
        let mut indices = Vec::with_capacity(side_indices.len() * 2 + 1);
        indices.extend(side_indices.iter().rev());
        indices.push(center_index);
        indices.extend(side_indices.iter());
        Self { indices }
    }

    /// 组合长度 (恒为奇数)
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// 中心块位置
    pub fn center_position(&self) -> usize {
        self.indices.len() / 2
    }

    /// 目录下标序列
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// 克重序列
    pub fn weights_g(&self) -> Vec<f64> {
        self.indices.iter().map(|&i| catalog::grams_at(i)).collect()
    }

    /// 编号序列 (P01..P06)
    pub fn labels(&self) -> Vec<&'static str> {
        self.indices.iter().map(|&i| catalog::label_at(i)).collect()
    }

    /// 总克重
    pub fn total_weight_g(&self) -> f64 {
        self.indices.iter().map(|&i| catalog::grams_at(i)).sum()
    }

    /// 是否回文 (构造即保证, 供校验使用)
    pub fn is_palindromic(&self) -> bool {
        let n = self.indices.len();
        (0..n / 2).all(|i| self.indices[i] == self.indices[n - 1 - i])
    }
}

// ==========================================
// CombinationEvaluation - 组合评估值
// ==========================================

/// 组合相对目标配重的派生评估值
///
/// 每个候选组合即时计算, 不缓存不修改
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinationEvaluation {
    /// 总克重
    pub total: f64,
    /// 带符号偏差 = total - target
    pub deviation: f64,
    /// 配重块总数
    pub total_count: usize,
    /// 使用的配重种类数
    pub type_count: usize,
    /// 重复度 = Σ(每种块数量 - 1)
    pub duplicate_score: usize,
    /// 偏重度 = Σ目录下标 (越小越偏重)
    pub heaviness_score: usize,
    /// 最轻块(P01)使用数量
    pub p01_count: usize,
}

impl CombinationEvaluation {
    /// 评估组合相对目标配重的各项指标
    ///
    /// # 参数
    /// - `combination`: 候选组合
    /// - `target_weight_g`: 目标配重 (克)
    pub fn evaluate(combination: &WeightCombination, target_weight_g: f64) -> Self {
        let mut counts = [0usize; CATALOG_SIZE];
        for &idx in combination.indices() {
            counts[idx] += 1;
        }

        let total = combination.total_weight_g();
        let type_count = counts.iter().filter(|&&c| c > 0).count();
        let duplicate_score = counts.iter().filter(|&&c| c > 0).map(|&c| c - 1).sum();
        let heaviness_score = combination.indices().iter().sum();

        Self {
            total,
            deviation: total - target_weight_g,
            total_count: combination.len(),
            type_count,
            duplicate_score,
            heaviness_score,
            p01_count: counts[P01_INDEX],
        }
    }
}

// ==========================================
// Solution / SearchOutcome - 搜索结果
// ==========================================

/// 单个配重方案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// 配重组合
    pub combination: WeightCombination,
    /// 总克重
    pub total_weight_g: f64,
    /// 带符号偏差 (克)
    pub deviation_g: f64,
}

/// 配重搜索结果: 主方案 + 备选方案
///
/// 两者都缺失表示在偏差与数量约束下无可行组合,
/// 调用方应视为可恢复情况(提示更换输入), 不是错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// 主方案 (非负偏差优先)
    pub primary: Option<Solution>,
    /// 备选方案 (绝对偏差最小, 与主方案不同)
    pub secondary: Option<Solution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindromic_construction() {
        // sides = [3, 5] → [5, 3, center, 3, 5]
        let combo = WeightCombination::from_center_and_sides(0, &[3, 5]);
        assert_eq!(combo.len(), 5);
        assert_eq!(combo.indices(), &[5, 3, 0, 3, 5]);
        assert_eq!(combo.center_position(), 2);
        assert!(combo.is_palindromic());
    }

    #[test]
    fn test_center_only() {
        let combo = WeightCombination::from_center_and_sides(2, &[]);
        assert_eq!(combo.len(), 1);
        assert_eq!(combo.indices(), &[2]);
        assert_eq!(combo.center_position(), 0);
        assert!(combo.is_palindromic());
    }

    #[test]
    fn test_evaluate_counts_and_scores() {
        // [P01, P06, P01]: center=P06(idx 0), sides=[P01(idx 5)]
        let combo = WeightCombination::from_center_and_sides(0, &[5]);
        let eval = CombinationEvaluation::evaluate(&combo, 20.0);

        assert_eq!(eval.total_count, 3);
        assert_eq!(eval.type_count, 2);
        assert_eq!(eval.duplicate_score, 1); // P01 重复一次
        assert_eq!(eval.heaviness_score, 10); // 5 + 0 + 5
        assert_eq!(eval.p01_count, 2);
        assert!((eval.total - (17.31 + 2.0 * 3.14)).abs() < 1e-9);
        assert!((eval.deviation - (eval.total - 20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_value_equality() {
        // 相同下标序列即相等, 不依赖序列化比较
        let a = WeightCombination::from_center_and_sides(1, &[2, 4]);
        let b = WeightCombination::from_center_and_sides(1, &[2, 4]);
        let c = WeightCombination::from_center_and_sides(1, &[4, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
