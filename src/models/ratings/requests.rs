use serde::Deserialize;

// 评价课程请求
#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub course_id: i64,
    pub student_id: i64,
    pub score: i32,
    pub comment: Option<String>,
}

// 更新评价请求
#[derive(Debug, Deserialize)]
pub struct UpdateRatingRequest {
    pub score: Option<i32>,
    pub comment: Option<String>,
}
