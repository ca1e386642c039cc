// ==========================================
// 产线节拍产能计算器 - 引擎层
// ==========================================
// 职责: 实现节拍与产能计算规则
// 红线: 引擎是纯函数,不做 I/O,不抛异常
// ==========================================

pub mod tact;

// 重导出核心引擎
pub use tact::TactTimeEngine;
