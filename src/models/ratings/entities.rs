use serde::{Deserialize, Serialize};

// 课程评价
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub student_id: i64,
    pub student_username: String,
    // 1 - 5 星
    pub score: i32,
    pub comment: Option<String>,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rated {} - {}",
            self.student_username, self.course_title, self.score
        )
    }
}
