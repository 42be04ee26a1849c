use serde::Deserialize;

// 创建学生档案请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentProfileRequest {
    pub user_id: i64,
    pub age: i32,
}

// 更新学生档案请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentProfileRequest {
    pub age: Option<i32>,
}
