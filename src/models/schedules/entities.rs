use serde::{Deserialize, Serialize};

// 可预约时段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub time_slot: chrono::DateTime<chrono::Utc>,
    pub available: bool,
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.course_title, self.time_slot)
    }
}

// 约课记录
//
// 关联的是 User 而不是 StudentProfile：试听用户可能还没有学生档案。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledClass {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub schedule_id: i64,
    pub course_title: String,
    pub time_slot: chrono::DateTime<chrono::Utc>,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    pub completed: bool,
}

impl std::fmt::Display for ScheduledClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} on {}",
            self.username, self.course_title, self.time_slot
        )
    }
}
