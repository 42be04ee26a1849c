use serde::Deserialize;

// 报名请求
#[derive(Debug, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub expiry_date: Option<chrono::NaiveDate>,
}

// 更新报名请求
//
// date_enrolled 在创建时写入，不可更新。
#[derive(Debug, Deserialize)]
pub struct UpdateEnrollmentRequest {
    pub expiry_date: Option<chrono::NaiveDate>,
    pub payment_confirmed: Option<bool>,
}

// 报名列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub payment_confirmed: Option<bool>,
}
