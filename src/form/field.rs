// ==========================================
// 产线节拍产能计算器 - 数值输入字段
// ==========================================
// 用途: "数值或空" 双态字段
// 空态保留给回显 (清空输入框时不回跳成 "0"),
// 计算口径一律收敛为确定数值
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// NumericField - 数值或空
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "state", content = "value")]
pub enum NumericField {
    Empty,
    Value(f64),
}

impl NumericField {
    /// 从输入框原始文本解析
    ///
    /// 收敛策略 (实时编辑契约: 任何按键都必须产出可渲染结果):
    /// - 空白 -> Empty
    /// - 可解析数值 -> 负数钳为 0 后保留
    /// - 无法解析 -> Empty
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumericField::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => NumericField::Value(n.max(0.0)),
            _ => NumericField::Empty,
        }
    }

    /// 从确定数值构造 (负数钳为 0)
    pub fn from_number(n: f64) -> Self {
        if n.is_finite() {
            NumericField::Value(n.max(0.0))
        } else {
            NumericField::Empty
        }
    }

    /// 计算口径: 空态按 0 处理
    pub fn as_number(&self) -> f64 {
        match self {
            NumericField::Empty => 0.0,
            NumericField::Value(n) => *n,
        }
    }

    /// 计算口径: 取整数 (向下取整)
    pub fn as_integer(&self) -> i32 {
        self.as_number().floor() as i32
    }

    /// 回显口径: 空态渲染为空串,整数不带小数点
    pub fn display(&self) -> String {
        match self {
            NumericField::Empty => String::new(),
            NumericField::Value(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NumericField::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_and_whitespace() {
        assert_eq!(NumericField::parse(""), NumericField::Empty);
        assert_eq!(NumericField::parse("   "), NumericField::Empty);
        assert_eq!(NumericField::parse("\t"), NumericField::Empty);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(NumericField::parse("20"), NumericField::Value(20.0));
        assert_eq!(NumericField::parse("12.5"), NumericField::Value(12.5));
        assert_eq!(NumericField::parse(" 7 "), NumericField::Value(7.0));
        assert_eq!(NumericField::parse("0"), NumericField::Value(0.0));
    }

    #[test]
    fn test_parse_negative_clamped_to_zero() {
        // 负数在进入配置时钳为 0
        assert_eq!(NumericField::parse("-3"), NumericField::Value(0.0));
        assert_eq!(NumericField::parse("-0.01"), NumericField::Value(0.0));
    }

    #[test]
    fn test_parse_garbage_degrades_to_empty() {
        assert_eq!(NumericField::parse("abc"), NumericField::Empty);
        assert_eq!(NumericField::parse("1.2.3"), NumericField::Empty);
        assert_eq!(NumericField::parse("NaN"), NumericField::Empty);
        assert_eq!(NumericField::parse("inf"), NumericField::Empty);
    }

    #[test]
    fn test_empty_computes_as_zero_but_displays_empty() {
        let field = NumericField::parse("");
        assert_eq!(field.as_number(), 0.0);
        assert_eq!(field.display(), "");
        assert!(field.is_empty());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(NumericField::Value(20.0).display(), "20");
        assert_eq!(NumericField::Value(12.5).display(), "12.5");
        assert_eq!(NumericField::Value(0.0).display(), "0");
    }

    #[test]
    fn test_as_integer_floors() {
        assert_eq!(NumericField::Value(3.9).as_integer(), 3);
        assert_eq!(NumericField::Value(4.0).as_integer(), 4);
        assert_eq!(NumericField::Empty.as_integer(), 0);
    }

    #[test]
    fn test_from_number_clamps() {
        assert_eq!(NumericField::from_number(-5.0), NumericField::Value(0.0));
        assert_eq!(NumericField::from_number(f64::NAN), NumericField::Empty);
        assert_eq!(NumericField::from_number(8.0), NumericField::Value(8.0));
    }
}
