// ==========================================
// 产线节拍产能计算器 - 领域类型定义
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与前端一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工序单位 (Stage Unit)
// ==========================================
// Sheet: 整版批次单位,产线早段工序按整版计时
// Row: 整版裁出的细分单位,后段工序按单条计时
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageUnit {
    Sheet, // 整版
    Row,   // 单条
}

impl StageUnit {
    /// 从前端传入的字符串解析工序单位
    ///
    /// # 参数
    /// - raw: "SHEET" 或 "ROW" (不区分大小写)
    ///
    /// # 返回
    /// - Some(StageUnit): 解析成功
    /// - None: 无法识别
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "SHEET" => Some(StageUnit::Sheet),
            "ROW" => Some(StageUnit::Row),
            _ => None,
        }
    }
}

impl fmt::Display for StageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageUnit::Sheet => write!(f, "SHEET"),
            StageUnit::Row => write!(f, "ROW"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stage_unit() {
        assert_eq!(StageUnit::parse("SHEET"), Some(StageUnit::Sheet));
        assert_eq!(StageUnit::parse("row"), Some(StageUnit::Row));
        assert_eq!(StageUnit::parse(" Sheet "), Some(StageUnit::Sheet));
        assert_eq!(StageUnit::parse("PIECE"), None);
        assert_eq!(StageUnit::parse(""), None);
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(StageUnit::parse(&StageUnit::Sheet.to_string()), Some(StageUnit::Sheet));
        assert_eq!(StageUnit::parse(&StageUnit::Row.to_string()), Some(StageUnit::Row));
    }

    #[test]
    fn test_serde_format() {
        // 序列化格式与前端约定一致
        assert_eq!(serde_json::to_string(&StageUnit::Sheet).unwrap(), "\"SHEET\"");
        assert_eq!(serde_json::to_string(&StageUnit::Row).unwrap(), "\"ROW\"");
    }
}
