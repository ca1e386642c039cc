// ==========================================
// 产线节拍产能计算器 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含计算逻辑,不含 I/O
// ==========================================

pub mod capacity;
pub mod stage;
pub mod types;

// 重导出核心类型
pub use capacity::{CapacityResult, LineMetrics, StageCapacity, Throughput};
pub use stage::{LineConfig, ProcessStage};
pub use types::StageUnit;
