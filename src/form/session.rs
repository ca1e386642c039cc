// ==========================================
// 产线节拍产能计算器 - 页面会话状态
// ==========================================
// 职责: 持有工序/参数表单,承接字段变更,同步重算
// 生命周期: 页面会话内存态,无持久化,刷新即重置
// ==========================================
// 红线: 唯一写者 (UI 事件串行),每次变更整体重算,
//       不做增量修补,从构造上杜绝陈旧读
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config;
use crate::domain::capacity::CapacityResult;
use crate::domain::stage::{LineConfig, ProcessStage};
use crate::domain::types::StageUnit;
use crate::engine::TactTimeEngine;
use crate::form::field::NumericField;
use serde::{Deserialize, Serialize};

// ==========================================
// StageForm - 工序编辑态
// ==========================================
// 字段保留 "数值或空" 双态,收敛发生在 to_process_stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageForm {
    pub stage_id: String,
    pub name: String,
    pub unit: StageUnit,
    pub cycle_time: NumericField,
    pub machine_count: NumericField,
}

impl StageForm {
    /// 由种子工序构造编辑态
    fn from_seed(stage: ProcessStage) -> Self {
        Self {
            stage_id: stage.stage_id,
            name: stage.name,
            unit: stage.unit,
            cycle_time: NumericField::from_number(stage.cycle_time_s),
            machine_count: NumericField::from_number(stage.machine_count as f64),
        }
    }

    /// 收敛为引擎输入 (模型边界: 空态按 0,机台数向下取整)
    pub fn to_process_stage(&self) -> ProcessStage {
        ProcessStage {
            stage_id: self.stage_id.clone(),
            name: self.name.clone(),
            unit: self.unit,
            cycle_time_s: self.cycle_time.as_number(),
            machine_count: self.machine_count.as_integer(),
        }
    }
}

// ==========================================
// ConfigForm - 产线参数编辑态
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigForm {
    pub work_hours_per_day: NumericField,
    pub work_days_per_month: NumericField,
    pub efficiency_percent: NumericField,
    pub units_per_batch: NumericField,
    pub yearly_target_millions: NumericField,
}

impl ConfigForm {
    fn from_config(config: &LineConfig) -> Self {
        Self {
            work_hours_per_day: NumericField::from_number(config.work_hours_per_day),
            work_days_per_month: NumericField::from_number(config.work_days_per_month),
            efficiency_percent: NumericField::from_number(config.efficiency_percent),
            units_per_batch: NumericField::from_number(config.units_per_batch as f64),
            yearly_target_millions: NumericField::from_number(config.yearly_target_millions),
        }
    }

    /// 收敛为引擎输入
    pub fn to_line_config(&self) -> LineConfig {
        LineConfig {
            work_hours_per_day: self.work_hours_per_day.as_number(),
            work_days_per_month: self.work_days_per_month.as_number(),
            efficiency_percent: self.efficiency_percent.as_number(),
            units_per_batch: self.units_per_batch.as_integer(),
            yearly_target_millions: self.yearly_target_millions.as_number(),
        }
    }
}

// ==========================================
// CalculatorSession - 计算器会话
// ==========================================
pub struct CalculatorSession {
    stages: Vec<StageForm>,
    config: ConfigForm,
    engine: TactTimeEngine,
    result: CapacityResult,
}

impl CalculatorSession {
    /// 以固定默认产线构造会话
    pub fn seeded() -> Self {
        let stages: Vec<StageForm> = config::default_stage_seeds()
            .into_iter()
            .map(StageForm::from_seed)
            .collect();
        let config_form = ConfigForm::from_config(&config::default_line_config());

        let engine = TactTimeEngine::new();
        let result = Self::compute_with(&engine, &stages, &config_form);

        tracing::info!(stage_count = stages.len(), "计算器会话已初始化");

        Self {
            stages,
            config: config_form,
            engine,
            result,
        }
    }

    /// 恢复默认种子 (等价于页面刷新)
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    // ==========================================
    // 访问器
    // ==========================================

    pub fn stages(&self) -> &[StageForm] {
        &self.stages
    }

    pub fn config(&self) -> &ConfigForm {
        &self.config
    }

    /// 当前产能结果 (每次字段变更后都已是最新)
    pub fn result(&self) -> &CapacityResult {
        &self.result
    }

    // ==========================================
    // 工序字段变更
    // ==========================================

    /// 修改工序节拍 (原始输入文本,空串保留空态)
    pub fn set_stage_cycle_time(&mut self, stage_id: &str, raw: &str) -> ApiResult<()> {
        let field = NumericField::parse(raw);
        self.stage_mut(stage_id)?.cycle_time = field;
        self.recompute();
        Ok(())
    }

    /// 修改工序并行机台数
    pub fn set_stage_machine_count(&mut self, stage_id: &str, raw: &str) -> ApiResult<()> {
        let field = NumericField::parse(raw);
        self.stage_mut(stage_id)?.machine_count = field;
        self.recompute();
        Ok(())
    }

    /// 修改工序计时单位 ("SHEET" / "ROW")
    pub fn set_stage_unit(&mut self, stage_id: &str, raw: &str) -> ApiResult<()> {
        let unit = StageUnit::parse(raw)
            .ok_or_else(|| ApiError::InvalidInput(format!("无法识别的工序单位: {}", raw)))?;
        self.stage_mut(stage_id)?.unit = unit;
        self.recompute();
        Ok(())
    }

    /// 修改工序显示名称
    pub fn set_stage_name(&mut self, stage_id: &str, name: &str) -> ApiResult<()> {
        self.stage_mut(stage_id)?.name = name.to_string();
        // 名称不参与计算,无需重算
        Ok(())
    }

    // ==========================================
    // 工序增删
    // ==========================================

    /// 追加新工序 (节拍留空,机台数 1)
    ///
    /// # 返回
    /// 新工序的稳定标识
    pub fn add_stage(&mut self, name: &str, unit: StageUnit) -> String {
        let stage_id = uuid::Uuid::new_v4().to_string();
        self.stages.push(StageForm {
            stage_id: stage_id.clone(),
            name: name.to_string(),
            unit,
            cycle_time: NumericField::Empty,
            machine_count: NumericField::Value(1.0),
        });
        tracing::debug!(stage_id = %stage_id, "追加工序");
        self.recompute();
        stage_id
    }

    /// 移除工序 (允许移除至空产线,结果保持良定义)
    pub fn remove_stage(&mut self, stage_id: &str) -> ApiResult<()> {
        let index = self
            .stages
            .iter()
            .position(|s| s.stage_id == stage_id)
            .ok_or_else(|| ApiError::NotFound(format!("工序不存在: {}", stage_id)))?;
        self.stages.remove(index);
        self.recompute();
        Ok(())
    }

    // ==========================================
    // 产线参数变更
    // ==========================================

    pub fn set_work_hours_per_day(&mut self, raw: &str) {
        self.config.work_hours_per_day = NumericField::parse(raw);
        self.recompute();
    }

    pub fn set_work_days_per_month(&mut self, raw: &str) {
        self.config.work_days_per_month = NumericField::parse(raw);
        self.recompute();
    }

    pub fn set_efficiency_percent(&mut self, raw: &str) {
        self.config.efficiency_percent = NumericField::parse(raw);
        self.recompute();
    }

    pub fn set_units_per_batch(&mut self, raw: &str) {
        self.config.units_per_batch = NumericField::parse(raw);
        self.recompute();
    }

    pub fn set_yearly_target_millions(&mut self, raw: &str) {
        self.config.yearly_target_millions = NumericField::parse(raw);
        self.recompute();
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn stage_mut(&mut self, stage_id: &str) -> ApiResult<&mut StageForm> {
        self.stages
            .iter_mut()
            .find(|s| s.stage_id == stage_id)
            .ok_or_else(|| ApiError::NotFound(format!("工序不存在: {}", stage_id)))
    }

    /// 整体重算 (同一输入轮次内同步完成)
    fn recompute(&mut self) {
        self.result = Self::compute_with(&self.engine, &self.stages, &self.config);
    }

    fn compute_with(
        engine: &TactTimeEngine,
        stages: &[StageForm],
        config: &ConfigForm,
    ) -> CapacityResult {
        let model_stages: Vec<ProcessStage> =
            stages.iter().map(StageForm::to_process_stage).collect();
        engine.compute(&model_stages, &config.to_line_config())
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::seeded()
    }
}
