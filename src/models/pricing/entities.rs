use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 定价
//
// 金额与百分比一律使用定点小数，避免浮点舍入漂移。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pricing {
    pub id: i64,
    // 自由文本类别，与 Course.course_type 按值对应，无外键
    pub course_type: String,
    pub price: Decimal,
}

impl std::fmt::Display for Pricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.course_type, self.price)
    }
}

// 折扣码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountCode {
    pub id: i64,
    pub code: String,
    pub discount_percent: Decimal,
}

impl std::fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
