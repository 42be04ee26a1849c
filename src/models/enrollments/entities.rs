use serde::{Deserialize, Serialize};

// 报名记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub student_username: String,
    pub course_id: i64,
    pub course_title: String,
    // 创建时写入，之后不变
    pub date_enrolled: chrono::DateTime<chrono::Utc>,
    pub expiry_date: Option<chrono::NaiveDate>,
    pub payment_confirmed: bool,
}

impl std::fmt::Display for Enrollment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} enrolled in {}",
            self.student_username, self.course_title
        )
    }
}
