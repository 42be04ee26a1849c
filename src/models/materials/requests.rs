use serde::Deserialize;

// 添加课程资料请求
//
// material_file 是已落盘文件的存储相对路径，
// 由上传侧用 utils::stored_file_path 生成。
#[derive(Debug, Deserialize)]
pub struct AddCourseMaterialRequest {
    pub course_id: i64,
    pub material_file: String,
    pub description: Option<String>,
}
