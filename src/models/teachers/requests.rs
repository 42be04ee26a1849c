use serde::Deserialize;

// 创建教师请求
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub user_id: i64,
    pub subject: String,
}

// 更新教师请求
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub subject: Option<String>,
}
