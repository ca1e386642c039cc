// ==========================================
// 产线节拍产能计算器 - 工序与产线参数模型
// ==========================================
// 红线: 引擎输入契约 - 数值已在表单层收敛为非负
// ==========================================

use crate::domain::types::StageUnit;
use serde::{Deserialize, Serialize};

// ==========================================
// ProcessStage - 生产工序
// ==========================================
// 用途: 引擎输入,按产线顺序排列 (顺序参与瓶颈并列裁决)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStage {
    // ===== 标识 =====
    pub stage_id: String, // 稳定不透明标识
    pub name: String,     // 显示名称

    // ===== 工艺参数 =====
    pub unit: StageUnit,   // 计时单位 (整版/单条)
    pub cycle_time_s: f64, // 单件节拍 (秒), 非负
    pub machine_count: i32, // 并行机台数; 计算时 <=0 一律按 1 处理
}

// ==========================================
// LineConfig - 产线全局参数
// ==========================================
// 单实例,由表单直接修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    // ===== 班次参数 =====
    pub work_hours_per_day: f64,  // 每日工作小时, 非负
    pub work_days_per_month: f64, // 每月工作天数, 非负

    // ===== 效率参数 =====
    // 不封顶: 超过 100 按原样放大产出 (显式策略,非缺陷)
    pub efficiency_percent: f64,

    // ===== 换算参数 =====
    pub units_per_batch: i32, // 整版裁出的单条数, 非负

    // ===== 目标参数 =====
    pub yearly_target_millions: f64, // 年目标 (百万最终单位)
}
