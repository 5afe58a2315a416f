// ==========================================
// 车轮动平衡配重计算系统 - 配重组合搜索引擎
// ==========================================
// 职责: 在标准配重目录上穷举回文组合,
//       按多级判据排出主方案与备选方案
// 输入: 目标配重 + 标定档位 + 基准幅值 u0
// 输出: SearchOutcome (主方案 / 备选方案, 可缺失)
// ==========================================
// 红线: 搜索完全确定性, 相同输入必得相同输出;
//       无方案用 None 表达, 不抛错
// ==========================================

use crate::config::calibration::{MAX_P01_COUNT, WIDENED_DEVIATION_G};
use crate::domain::catalog::{self, CATALOG_SIZE};
use crate::domain::combination::{
    CombinationEvaluation, SearchOutcome, Solution, WeightCombination,
};
use crate::domain::types::PercentMode;
use std::cmp::Ordering;
use tracing::instrument;

// ==========================================
// 搜索参数
// ==========================================

/// 带符号偏差的接受区间 [min, max] (克)
#[derive(Debug, Clone, Copy)]
struct DeviationRange {
    min: f64,
    max: f64,
}

impl DeviationRange {
    fn contains(&self, deviation: f64) -> bool {
        deviation >= self.min && deviation <= self.max
    }
}

/// 排序判据模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RankingMode {
    /// 非负偏差优先 (主方案): 小的非负偏差 > 任何负偏差
    NonNegativeFirst,
    /// 绝对偏差优先 (备选方案): 只看 |偏差| 大小
    ZeroFirst,
}

/// 由基准幅值与档位派生的搜索边界
#[derive(Debug, Clone, Copy)]
struct SearchLimits {
    /// 镜像对数上限 = (配重块总数上限 - 1) / 2
    max_pairs: usize,
    /// 中心块必须是组合中最重的块 (u0 < 4 时生效)
    center_must_be_heaviest: bool,
}

impl SearchLimits {
    /// 派生搜索边界
    ///
    /// 配重块总数上限规则:
    /// - u0 < 3        → 7
    /// - 3 ≤ u0 < 4    → 95档 9, 99档 7
    /// - u0 ≥ 4        → 9
    fn derive(u0: f64, mode: PercentMode) -> Self {
        let max_total_count: usize = if u0 < 3.0 {
            7
        } else if u0 < 4.0 {
            if mode == PercentMode::P95 {
                9
            } else {
                7
            }
        } else {
            9
        };

        Self {
            max_pairs: (max_total_count - 1) / 2,
            center_must_be_heaviest: u0 < 4.0,
        }
    }
}

/// 候选组合及其评估值
#[derive(Debug, Clone)]
struct Candidate {
    combination: WeightCombination,
    eval: CombinationEvaluation,
}

impl Candidate {
    fn into_solution(self) -> Solution {
        Solution {
            total_weight_g: self.eval.total,
            deviation_g: self.eval.deviation,
            combination: self.combination,
        }
    }
}

// ==========================================
// WeightSearchEngine - 配重组合搜索引擎
// ==========================================
pub struct WeightSearchEngine {
    // 无状态引擎, 只依赖配重目录
}

impl WeightSearchEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 搜索目标配重的主方案与备选方案
    ///
    /// 两阶段驱动:
    /// 1) 非负偏差优先, 区间 [0, allowed_deviation];
    ///    无候选时放宽到 [0, 2] 重试
    /// 2) 绝对偏差优先, 区间 [-allowed_deviation, +allowed_deviation]
    /// 3) 阶段2榜首与主方案相同组合时, 顺延到阶段2次优;
    ///    次优也相同或缺失则无备选
    ///
    /// # 参数
    /// - `target_weight_g`: 目标配重 (克, > 0)
    /// - `mode`: 标定档位
    /// - `u0`: 基准测量幅值 (决定数量上限与中心块约束)
    /// - `allowed_deviation_g`: 允许偏差 (克, ≥ 0)
    ///
    /// # 返回
    /// 主方案与备选方案, 两者都缺失表示约束下无可行组合
    #[instrument(skip(self))]
    pub fn search(
        &self,
        target_weight_g: f64,
        mode: PercentMode,
        u0: f64,
        allowed_deviation_g: f64,
    ) -> SearchOutcome {
        let limits = SearchLimits::derive(u0, mode);

        // 阶段1: 非负偏差优先
        let narrow = DeviationRange {
            min: 0.0,
            max: allowed_deviation_g,
        };
        let mut pass_a = self.rank(target_weight_g, &limits, narrow, RankingMode::NonNegativeFirst);
        if pass_a.is_empty() {
            // 放宽偏差上限重试
            let widened = DeviationRange {
                min: 0.0,
                max: WIDENED_DEVIATION_G,
            };
            pass_a = self.rank(target_weight_g, &limits, widened, RankingMode::NonNegativeFirst);
        }

        // 阶段2: 绝对偏差优先, 允许负偏差
        let symmetric = DeviationRange {
            min: -allowed_deviation_g,
            max: allowed_deviation_g,
        };
        let pass_b = self.rank(target_weight_g, &limits, symmetric, RankingMode::ZeroFirst);

        let primary = pass_a.first().cloned();

        // 与主方案去重 (值相等比较)
        let secondary = pass_b
            .iter()
            .find(|c| match &primary {
                Some(p) => c.combination != p.combination,
                None => true,
            })
            .cloned();

        SearchOutcome {
            primary: primary.map(Candidate::into_solution),
            secondary: secondary.map(Candidate::into_solution),
        }
    }

    // ==========================================
    // 单阶段: 穷举 + 排序
    // ==========================================

    /// 穷举接受区间内的全部候选并按判据排序
    ///
    /// 空间上界: 中心 6 种 × 侧边多重组合 210 种 = 1260,
    /// 收集后整体排序即可, 无需流式维护最优/次优
    fn rank(
        &self,
        target_weight_g: f64,
        limits: &SearchLimits,
        range: DeviationRange,
        mode: RankingMode,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for center in 0..CATALOG_SIZE {
            let mut sides = Vec::with_capacity(limits.max_pairs);
            self.extend(
                center,
                &mut sides,
                0,
                target_weight_g,
                limits,
                range,
                &mut candidates,
            );
        }

        candidates.sort_by(|a, b| self.compare(a, b, mode, limits));
        candidates
    }

    /// 递归扩展侧边序列 (目录下标非降序, 允许重复)
    ///
    /// 剪枝: 当前总重已超出 target + range.max 时整支放弃
    /// (追加镜像对只会增重, 对负偏差区间同样安全)
    #[allow(clippy::too_many_arguments)]
    fn extend(
        &self,
        center: usize,
        sides: &mut Vec<usize>,
        last_idx: usize,
        target_weight_g: f64,
        limits: &SearchLimits,
        range: DeviationRange,
        out: &mut Vec<Candidate>,
    ) {
        let side_total: f64 = sides.iter().map(|&i| catalog::grams_at(i)).sum();
        let total = catalog::grams_at(center) + 2.0 * side_total;
        if total > target_weight_g + range.max {
            return;
        }

        let combination = WeightCombination::from_center_and_sides(center, sides);
        let eval = CombinationEvaluation::evaluate(&combination, target_weight_g);
        if eval.p01_count <= MAX_P01_COUNT && range.contains(eval.deviation) {
            out.push(Candidate { combination, eval });
        }

        if sides.len() < limits.max_pairs {
            // u0 < 4 时侧边不得重于中心块: 下标不得小于中心下标
            let start = if limits.center_must_be_heaviest {
                last_idx.max(center)
            } else {
                last_idx
            };
            for i in start..CATALOG_SIZE {
                sides.push(i);
                self.extend(center, sides, i, target_weight_g, limits, range, out);
                sides.pop();
            }
        }
    }

    // ==========================================
    // 多级判据比较
    // ==========================================

    /// 比较两个候选的优先级
    ///
    /// 判据链:
    /// 1. 偏差键 (按模式: 非负优先 / 绝对值优先)
    /// 2. total_count 升序 (块数少优先)
    /// 3. duplicate_score 升序 (非负模式下仅 u0 < 4 生效,
    ///    绝对值模式下恒生效)
    /// 4. type_count 升序 (种类少优先)
    /// 5. heaviness_score 升序 (偏重组合优先)
    ///
    /// # 返回
    /// Ordering::Less 表示 a 优先于 b
    fn compare(
        &self,
        a: &Candidate,
        b: &Candidate,
        mode: RankingMode,
        limits: &SearchLimits,
    ) -> Ordering {
        // 1. 偏差键
        match self.compare_deviation(&a.eval.deviation, &b.eval.deviation, mode) {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. 块数少优先
        match a.eval.total_count.cmp(&b.eval.total_count) {
            Ordering::Equal => {}
            other => return other,
        }

        // 3. 重复度 (生效条件随模式不同)
        let duplicate_applies = match mode {
            RankingMode::NonNegativeFirst => limits.center_must_be_heaviest,
            RankingMode::ZeroFirst => true,
        };
        if duplicate_applies {
            match a.eval.duplicate_score.cmp(&b.eval.duplicate_score) {
                Ordering::Equal => {}
                other => return other,
            }
        }

        // 4. 种类少优先
        match a.eval.type_count.cmp(&b.eval.type_count) {
            Ordering::Equal => {}
            other => return other,
        }

        // 5. 偏重优先
        a.eval.heaviness_score.cmp(&b.eval.heaviness_score)
    }

    /// 偏差键比较
    ///
    /// - 非负优先: 非负偏差按大小升序, 且任何非负偏差优于负偏差,
    ///   负偏差之间按绝对值升序
    /// - 绝对值优先: 只比较 |偏差|
    fn compare_deviation(&self, a: &f64, b: &f64, mode: RankingMode) -> Ordering {
        match mode {
            RankingMode::NonNegativeFirst => {
                let class = |d: f64| u8::from(d < 0.0);
                match class(*a).cmp(&class(*b)) {
                    Ordering::Equal => a.abs().total_cmp(&b.abs()),
                    other => other,
                }
            }
            RankingMode::ZeroFirst => a.abs().total_cmp(&b.abs()),
        }
    }
}

impl Default for WeightSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
