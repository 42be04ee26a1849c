use serde::Deserialize;

// 创建课时请求
#[derive(Debug, Deserialize)]
pub struct CreateLessonRequest {
    pub course_id: i64,
    pub lesson_number: i32,
    pub title: String,
    pub duration_secs: i64,
}

// 更新课时请求
#[derive(Debug, Deserialize)]
pub struct UpdateLessonRequest {
    pub lesson_number: Option<i32>,
    pub title: Option<String>,
    pub duration_secs: Option<i64>,
    pub completed: Option<bool>,
}
