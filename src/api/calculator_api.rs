// ==========================================
// 产线节拍产能计算器 - 计算器门面
// ==========================================
// 职责: 包装会话,输出展示用视图模型
// 输入: UI 外壳的字段变更 (原始文本)
// 输出: CalculatorView (每次变更后整体刷新)
// ==========================================
// 红线: 展示舍入只在本层 - 有效节拍 1 位小数,
//       产量向下取整; 引擎结果保持未舍入
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::capacity::{CapacityResult, LineMetrics};
use crate::domain::types::StageUnit;
use crate::form::session::{CalculatorSession, ConfigForm, StageForm};
use serde::{Deserialize, Serialize};

// ==========================================
// 视图模型
// ==========================================

/// 工序行视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageView {
    pub stage_id: String,
    pub name: String,
    pub unit: StageUnit,
    // 原始回显: 空态渲染为空串,不回跳成 "0"
    pub cycle_time: String,
    pub machine_count: String,
    // 有效节拍, 1 位小数
    pub effective_cycle_time: String,
    // 瓶颈高亮: 仅在目标未达成时标记 (显式 UX 策略)
    pub is_bottleneck: bool,
}

/// 产量汇总面板视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryView {
    pub line_tact_time: String, // 1 位小数
    // 产量计数,向下取整
    pub units_per_hour: i64,
    pub units_per_day: i64,
    pub units_per_month: i64,
    pub units_per_year: i64,
    pub final_units_per_year: i64,
    pub yearly_target_units: i64,
    pub target_met: bool,
}

/// 产线参数回显视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigView {
    pub work_hours_per_day: String,
    pub work_days_per_month: String,
    pub efficiency_percent: String,
    pub units_per_batch: String,
    pub yearly_target_millions: String,
}

/// 计算器整体视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorView {
    pub stages: Vec<StageView>,
    pub summary: SummaryView,
    pub config: ConfigView,
}

// ==========================================
// CalculatorApi - 计算器门面
// ==========================================
pub struct CalculatorApi {
    session: CalculatorSession,
}

impl CalculatorApi {
    /// 以默认产线构造
    pub fn new() -> Self {
        Self {
            session: CalculatorSession::seeded(),
        }
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 当前整体视图
    pub fn view(&self) -> CalculatorView {
        let result = self.session.result();
        CalculatorView {
            stages: self
                .session
                .stages()
                .iter()
                .map(|stage| Self::stage_view(stage, result))
                .collect(),
            summary: Self::summary_view(result, self.session.config()),
            config: Self::config_view(self.session.config()),
        }
    }

    /// 当前整体视图 (JSON 字符串,供 IPC 边界直接下发)
    pub fn view_json(&self) -> ApiResult<String> {
        serde_json::to_string(&self.view())
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    // ==========================================
    // 工序变更
    // ==========================================

    pub fn set_stage_cycle_time(&mut self, stage_id: &str, raw: &str) -> ApiResult<CalculatorView> {
        self.session.set_stage_cycle_time(stage_id, raw)?;
        Ok(self.view())
    }

    pub fn set_stage_machine_count(
        &mut self,
        stage_id: &str,
        raw: &str,
    ) -> ApiResult<CalculatorView> {
        self.session.set_stage_machine_count(stage_id, raw)?;
        Ok(self.view())
    }

    pub fn set_stage_unit(&mut self, stage_id: &str, raw: &str) -> ApiResult<CalculatorView> {
        self.session.set_stage_unit(stage_id, raw)?;
        Ok(self.view())
    }

    pub fn set_stage_name(&mut self, stage_id: &str, name: &str) -> ApiResult<CalculatorView> {
        self.session.set_stage_name(stage_id, name)?;
        Ok(self.view())
    }

    /// 追加工序
    ///
    /// # 参数
    /// - name: 显示名称
    /// - unit_raw: "SHEET" / "ROW"
    ///
    /// # 返回
    /// 新工序的稳定标识
    pub fn add_stage(&mut self, name: &str, unit_raw: &str) -> ApiResult<String> {
        let unit = StageUnit::parse(unit_raw)
            .ok_or_else(|| ApiError::InvalidInput(format!("无法识别的工序单位: {}", unit_raw)))?;
        Ok(self.session.add_stage(name, unit))
    }

    pub fn remove_stage(&mut self, stage_id: &str) -> ApiResult<CalculatorView> {
        self.session.remove_stage(stage_id)?;
        Ok(self.view())
    }

    // ==========================================
    // 产线参数变更
    // ==========================================

    pub fn set_work_hours_per_day(&mut self, raw: &str) -> CalculatorView {
        self.session.set_work_hours_per_day(raw);
        self.view()
    }

    pub fn set_work_days_per_month(&mut self, raw: &str) -> CalculatorView {
        self.session.set_work_days_per_month(raw);
        self.view()
    }

    pub fn set_efficiency_percent(&mut self, raw: &str) -> CalculatorView {
        self.session.set_efficiency_percent(raw);
        self.view()
    }

    pub fn set_units_per_batch(&mut self, raw: &str) -> CalculatorView {
        self.session.set_units_per_batch(raw);
        self.view()
    }

    pub fn set_yearly_target_millions(&mut self, raw: &str) -> CalculatorView {
        self.session.set_yearly_target_millions(raw);
        self.view()
    }

    /// 恢复默认产线
    pub fn reset(&mut self) -> CalculatorView {
        self.session.reset();
        self.view()
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn stage_view(stage: &StageForm, result: &CapacityResult) -> StageView {
        let effective = result
            .effective_cycle_time(&stage.stage_id)
            .unwrap_or(0.0);
        StageView {
            stage_id: stage.stage_id.clone(),
            name: stage.name.clone(),
            unit: stage.unit,
            cycle_time: stage.cycle_time.display(),
            machine_count: stage.machine_count.display(),
            effective_cycle_time: format!("{:.1}", effective),
            is_bottleneck: result.is_bottleneck(&stage.stage_id) && !result.target_met,
        }
    }

    fn summary_view(result: &CapacityResult, config: &ConfigForm) -> SummaryView {
        let target_units = config.yearly_target_millions.as_number() * 1_000_000.0;
        SummaryView {
            line_tact_time: format!("{:.1}", result.line_tact_time_s),
            units_per_hour: result.throughput.units_per_hour.floor() as i64,
            units_per_day: result.throughput.units_per_day.floor() as i64,
            units_per_month: result.throughput.units_per_month.floor() as i64,
            units_per_year: result.throughput.units_per_year.floor() as i64,
            final_units_per_year: result.final_units_per_year.floor() as i64,
            yearly_target_units: target_units.floor() as i64,
            target_met: result.target_met,
        }
    }

    fn config_view(config: &ConfigForm) -> ConfigView {
        ConfigView {
            work_hours_per_day: config.work_hours_per_day.display(),
            work_days_per_month: config.work_days_per_month.display(),
            efficiency_percent: config.efficiency_percent.display(),
            units_per_batch: config.units_per_batch.display(),
            yearly_target_millions: config.yearly_target_millions.display(),
        }
    }
}

impl Default for CalculatorApi {
    fn default() -> Self {
        Self::new()
    }
}
