use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub course_type: String,
    pub lessons_count: i32,
    pub materials: String,
    pub image: Option<String>,
    pub teacher_id: Option<i64>,
}

// 更新课程请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_type: Option<String>,
    pub lessons_count: Option<i32>,
    pub materials: Option<String>,
    pub image: Option<String>,
    pub teacher_id: Option<i64>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub course_type: Option<String>,
    pub teacher_id: Option<i64>,
}
