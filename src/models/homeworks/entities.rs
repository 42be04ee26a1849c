use serde::{Deserialize, Serialize};

// 作业提交
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    pub id: i64,
    // 存储相对路径（homework/ 前缀下）
    pub file: String,
    pub student_id: i64,
    pub student_username: String,
    pub course_id: i64,
    pub course_title: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl std::fmt::Display for Homework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Homework for {} in {}",
            self.student_username, self.course_title
        )
    }
}
