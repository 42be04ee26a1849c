use serde::{Deserialize, Serialize};

// 学生档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub age: i32,
}

impl std::fmt::Display for StudentProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
