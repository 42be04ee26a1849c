use super::entities::Enrollment;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 报名列表响应
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Enrollment>,
}
