// ==========================================
// 产线节拍产能计算器 - 节拍计算引擎
// ==========================================
// 职责: 瓶颈识别 + 节拍推导 + 产量瀑布
// 输入: 工序列表 (有序) + 产线全局参数
// 输出: CapacityResult
// ==========================================
// 红线: 无状态引擎,纯函数,对文档化输入域全完备
// 红线: 引擎内部不舍入,逐次重算结果逐位一致
// ==========================================

use crate::domain::capacity::{CapacityResult, StageCapacity, Throughput};
use crate::domain::stage::{LineConfig, ProcessStage};
use crate::domain::types::StageUnit;
use tracing::instrument;

// ==========================================
// TactTimeEngine - 节拍计算引擎
// ==========================================
pub struct TactTimeEngine {
    // 无状态引擎,不需要注入依赖
}

impl TactTimeEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算产线节拍与产量
    ///
    /// 规则:
    /// 1) 逐工序折算有效节拍 (整版口径, 并行机台线性分摊)
    /// 2) 瓶颈 = 有效节拍最大的工序 (并列时输入顺序首个)
    /// 3) 产线节拍 = 瓶颈有效节拍
    /// 4) 产量瀑布: 时 -> 日 -> 月 -> 年 -> 最终单位
    ///
    /// # 参数
    /// - `stages`: 工序列表 (顺序有意义)
    /// - `config`: 产线全局参数
    ///
    /// # 返回
    /// 完整产能结果; 空产线返回全零结果,不报错
    #[instrument(skip(self, stages, config), fields(stage_count = stages.len()))]
    pub fn compute(&self, stages: &[ProcessStage], config: &LineConfig) -> CapacityResult {
        // 1. 逐工序有效节拍
        let stage_capacities: Vec<StageCapacity> = stages
            .iter()
            .map(|stage| StageCapacity {
                stage_id: stage.stage_id.clone(),
                effective_cycle_time_s: self.effective_cycle_time(stage, config),
            })
            .collect();

        // 2. 瓶颈识别: 严格大于比较,并列时首个工序胜出
        let mut bottleneck_stage_id: Option<String> = None;
        let mut line_tact_time_s = 0.0_f64;
        for capacity in &stage_capacities {
            if bottleneck_stage_id.is_none() || capacity.effective_cycle_time_s > line_tact_time_s {
                line_tact_time_s = capacity.effective_cycle_time_s;
                bottleneck_stage_id = Some(capacity.stage_id.clone());
            }
        }

        // 3. 产量瀑布 (全零节拍时守护除零,产量归零而不是无穷)
        let units_per_hour = if line_tact_time_s > 0.0 {
            3600.0 / line_tact_time_s
        } else {
            0.0
        };
        let units_per_day =
            units_per_hour * config.work_hours_per_day * (config.efficiency_percent / 100.0);
        let units_per_month = units_per_day * config.work_days_per_month;
        let units_per_year = units_per_month * 12.0;
        let final_units_per_year = units_per_year * config.units_per_batch as f64;

        // 4. 目标判定 (含边界: >= )
        let target_met = final_units_per_year >= config.yearly_target_millions * 1_000_000.0;

        CapacityResult {
            stage_capacities,
            bottleneck_stage_id,
            line_tact_time_s,
            throughput: Throughput {
                units_per_hour,
                units_per_day,
                units_per_month,
                units_per_year,
            },
            final_units_per_year,
            target_met,
        }
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 折算单工序有效节拍 (秒/整版)
    ///
    /// - 整版工序: cycle_time / 机台数
    /// - 单条工序: cycle_time × 整版换算系数 / 机台数
    ///
    /// 机台数 <= 0 一律按 1 处理,绝不除以零或负数
    fn effective_cycle_time(&self, stage: &ProcessStage, config: &LineConfig) -> f64 {
        let machines = stage.machine_count.max(1) as f64;
        match stage.unit {
            StageUnit::Sheet => stage.cycle_time_s / machines,
            StageUnit::Row => stage.cycle_time_s * config.units_per_batch as f64 / machines,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for TactTimeEngine {
    fn default() -> Self {
        Self::new()
    }
}
