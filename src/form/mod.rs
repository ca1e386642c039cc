// ==========================================
// 产线节拍产能计算器 - 表单层
// ==========================================
// 职责: 输入字段的数值收敛 + 页面会话状态
// 红线: 收敛在此完成,引擎只见确定数值
// ==========================================

pub mod field;
pub mod session;

// 重导出核心类型
pub use field::NumericField;
pub use session::{CalculatorSession, ConfigForm, StageForm};
