// ==========================================
// 产线节拍产能计算器 - API层错误类型
// ==========================================
// 职责: 定义面向 UI 外壳的错误类型
// 工具: thiserror 派生宏
// ==========================================
// 说明: 计算核心是全函数,没有错误概念;
//       这里只覆盖寻址、解析与序列化三类边界失败
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("序列化失败: {0}")]
    Serialization(String),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
