use serde::Deserialize;

// 提交作业请求
//
// file 是已落盘文件的存储相对路径，由上传侧用 utils::stored_file_path 生成。
#[derive(Debug, Deserialize)]
pub struct SubmitHomeworkRequest {
    pub file: String,
    pub student_id: i64,
    pub course_id: i64,
}

// 作业列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
}
