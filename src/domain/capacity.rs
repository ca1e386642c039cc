// ==========================================
// 产线节拍产能计算器 - 产能结果模型
// ==========================================
// 用途: 引擎输出,每次输入变更后整体重算,不落库
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// StageCapacity - 单工序有效节拍
// ==========================================
// 有效节拍: 一个整版批次单位通过该工序所需秒数 (已折算并行机台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCapacity {
    pub stage_id: String,
    pub effective_cycle_time_s: f64,
}

// ==========================================
// Throughput - 产量瀑布
// ==========================================
// 全部为整版批次单位口径,未做任何舍入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throughput {
    pub units_per_hour: f64,
    pub units_per_day: f64,
    pub units_per_month: f64,
    pub units_per_year: f64,
}

impl Throughput {
    /// 全零产量 (空产线 / 全零节拍时的确定结果)
    pub fn zero() -> Self {
        Self {
            units_per_hour: 0.0,
            units_per_day: 0.0,
            units_per_month: 0.0,
            units_per_year: 0.0,
        }
    }
}

// ==========================================
// CapacityResult - 产能计算结果
// ==========================================
// 红线: 引擎内部不舍入,展示层才做格式化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    // ===== 逐工序 =====
    pub stage_capacities: Vec<StageCapacity>, // 按输入顺序排列

    // ===== 瓶颈 =====
    pub bottleneck_stage_id: Option<String>, // 空产线时为 None
    pub line_tact_time_s: f64,               // 瓶颈工序有效节拍

    // ===== 产量 =====
    pub throughput: Throughput,
    pub final_units_per_year: f64, // 年产量 × 整版换算系数

    // ===== 目标 =====
    pub target_met: bool, // final_units_per_year >= 目标 (含边界)
}

// ==========================================
// Trait: LineMetrics
// ==========================================
// 用途: 展示层按工序查询结果的统一接口
pub trait LineMetrics {
    /// 按工序ID查询有效节拍
    fn effective_cycle_time(&self, stage_id: &str) -> Option<f64>;

    /// 判断某工序是否为瓶颈
    fn is_bottleneck(&self, stage_id: &str) -> bool;
}

impl LineMetrics for CapacityResult {
    /// 按工序ID查询有效节拍
    ///
    /// # 返回
    /// - Some(秒): 工序存在
    /// - None: 工序不在本次计算输入中
    fn effective_cycle_time(&self, stage_id: &str) -> Option<f64> {
        self.stage_capacities
            .iter()
            .find(|c| c.stage_id == stage_id)
            .map(|c| c.effective_cycle_time_s)
    }

    /// 判断某工序是否为瓶颈
    ///
    /// 并列时以输入顺序首个为准,由引擎裁决
    fn is_bottleneck(&self, stage_id: &str) -> bool {
        self.bottleneck_stage_id.as_deref() == Some(stage_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_zero() {
        let t = Throughput::zero();
        assert_eq!(t.units_per_hour, 0.0);
        assert_eq!(t.units_per_year, 0.0);
    }

    #[test]
    fn test_line_metrics_lookup() {
        let result = CapacityResult {
            stage_capacities: vec![
                StageCapacity {
                    stage_id: "a".to_string(),
                    effective_cycle_time_s: 10.0,
                },
                StageCapacity {
                    stage_id: "b".to_string(),
                    effective_cycle_time_s: 24.0,
                },
            ],
            bottleneck_stage_id: Some("b".to_string()),
            line_tact_time_s: 24.0,
            throughput: Throughput::zero(),
            final_units_per_year: 0.0,
            target_met: false,
        };

        assert_eq!(result.effective_cycle_time("a"), Some(10.0));
        assert_eq!(result.effective_cycle_time("c"), None);
        assert!(result.is_bottleneck("b"));
        assert!(!result.is_bottleneck("a"));
    }
}
