// ==========================================
// 产线节拍产能计算器 - 核心库
// ==========================================
// 系统定位: 决策支持计算器 (支持页面内嵌)
// 技术栈: Rust 纯计算核心 + 表单会话层
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 节拍产能计算
pub mod engine;

// 表单层 - 输入字段与编辑会话
pub mod form;

// 配置层 - 默认产线与参数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 视图模型与门面
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::StageUnit;

// 领域实体
pub use domain::{CapacityResult, LineConfig, LineMetrics, ProcessStage, StageCapacity, Throughput};

// 引擎
pub use engine::TactTimeEngine;

// 表单
pub use form::{CalculatorSession, ConfigForm, NumericField, StageForm};

// API
pub use api::{
    ApiError, ApiResult, CalculatorApi, CalculatorView, ConfigView, StageView, SummaryView,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "产线节拍产能计算器";

// ==========================================
// 预编译检查
// ==========================================
