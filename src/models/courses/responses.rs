use super::entities::Course;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Course>,
}
