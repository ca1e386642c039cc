// ==========================================
// 产线节拍产能计算器 - API 层
// ==========================================
// 职责: 提供视图模型与门面接口,供 UI 外壳调用
// 红线: 所有展示舍入只发生在本层
// ==========================================

pub mod calculator_api;
pub mod error;

// 重导出核心类型
pub use calculator_api::{CalculatorApi, CalculatorView, ConfigView, StageView, SummaryView};
pub use error::{ApiError, ApiResult};
