use rust_decimal::Decimal;
use serde::Deserialize;

// 创建定价请求
#[derive(Debug, Deserialize)]
pub struct CreatePricingRequest {
    pub course_type: String,
    pub price: Decimal,
}

// 更新定价请求
#[derive(Debug, Deserialize)]
pub struct UpdatePricingRequest {
    pub course_type: Option<String>,
    pub price: Option<Decimal>,
}

// 创建折扣码请求
//
// code 为空时由存储层生成随机码。
#[derive(Debug, Deserialize)]
pub struct CreateDiscountCodeRequest {
    pub code: Option<String>,
    pub discount_percent: Decimal,
}
