use serde::{Deserialize, Serialize};

// 课程资料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMaterial {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    // 存储相对路径（course_materials/ 前缀下）
    pub material_file: String,
    pub description: Option<String>,
}

impl std::fmt::Display for CourseMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Material", self.course_title)
    }
}
