use serde::Deserialize;

// 创建时段请求
#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub course_id: i64,
    pub time_slot: chrono::DateTime<chrono::Utc>,
}

// 更新时段请求
#[derive(Debug, Deserialize)]
pub struct UpdateScheduleRequest {
    pub time_slot: Option<chrono::DateTime<chrono::Utc>>,
    pub available: Option<bool>,
}

// 约课请求
#[derive(Debug, Deserialize)]
pub struct BookClassRequest {
    pub user_id: i64,
    pub schedule_id: i64,
}

// 更新约课请求
#[derive(Debug, Deserialize)]
pub struct UpdateScheduledClassRequest {
    pub completed: Option<bool>,
}
