// ==========================================
// 产线节拍产能计算器 - 默认产线配置
// ==========================================
// 职责: 提供首次渲染的固定种子数据
// 生命周期: 种子仅存在于页面会话内,刷新即重置
// ==========================================

use crate::domain::stage::{LineConfig, ProcessStage};
use crate::domain::types::StageUnit;
use crate::i18n::t;

// ===== 默认班次参数 =====
pub const DEFAULT_WORK_HOURS_PER_DAY: f64 = 8.0;
pub const DEFAULT_WORK_DAYS_PER_MONTH: f64 = 20.0;

// ===== 默认效率与换算 =====
pub const DEFAULT_EFFICIENCY_PERCENT: f64 = 85.0;
pub const DEFAULT_UNITS_PER_BATCH: i32 = 12;

// ===== 默认年目标 (百万最终单位) =====
pub const DEFAULT_YEARLY_TARGET_MILLIONS: f64 = 3.0;

/// 默认产线全局参数
pub fn default_line_config() -> LineConfig {
    LineConfig {
        work_hours_per_day: DEFAULT_WORK_HOURS_PER_DAY,
        work_days_per_month: DEFAULT_WORK_DAYS_PER_MONTH,
        efficiency_percent: DEFAULT_EFFICIENCY_PERCENT,
        units_per_batch: DEFAULT_UNITS_PER_BATCH,
        yearly_target_millions: DEFAULT_YEARLY_TARGET_MILLIONS,
    }
}

/// 默认工序种子 (按产线顺序)
///
/// 前三道按整版计时,后三道裁切后按单条计时;
/// 名称走 i18n,随当前语言渲染
pub fn default_stage_seeds() -> Vec<ProcessStage> {
    vec![
        seed("feeding", StageUnit::Sheet, 15.0, 1),
        seed("printing", StageUnit::Sheet, 20.0, 1),
        seed("laminating", StageUnit::Sheet, 18.0, 1),
        seed("slitting", StageUnit::Row, 2.0, 2),
        seed("inspection", StageUnit::Row, 3.0, 2),
        seed("packing", StageUnit::Row, 4.0, 2),
    ]
}

fn seed(stage_id: &str, unit: StageUnit, cycle_time_s: f64, machine_count: i32) -> ProcessStage {
    ProcessStage {
        stage_id: stage_id.to_string(),
        name: t(&format!("stage.{}", stage_id)),
        unit,
        cycle_time_s,
        machine_count,
    }
}
