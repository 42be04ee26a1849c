use super::entities::Homework;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 作业列表响应
#[derive(Debug, Serialize)]
pub struct HomeworkListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Homework>,
}
