use serde::{Deserialize, Serialize};

// 课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 唯一 ID
    pub id: i64,
    // 课程标题
    pub title: String,
    // 课程介绍
    pub description: String,
    // 课程类别（自由文本，如 "group" / "individual"）
    pub course_type: String,
    // 计划课时数
    pub lessons_count: i32,
    // 教材说明
    pub materials: String,
    // 封面图相对路径（course_images/ 前缀下）
    pub image: Option<String>,
    // 授课教师，可为空（未分配或教师账号已删除）
    pub teacher_id: Option<i64>,
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
