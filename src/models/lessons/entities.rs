use serde::{Deserialize, Serialize};

// 课时
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    // 课程内的课时序号，同一课程内唯一
    pub lesson_number: i32,
    pub title: String,
    pub duration_secs: i64,
    pub completed: bool,
}

impl Lesson {
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.duration_secs)
    }
}

impl std::fmt::Display for Lesson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Lesson {} of {}",
            self.title, self.lesson_number, self.course_title
        )
    }
}
