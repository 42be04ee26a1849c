//! 业务模型定义
//!
//! 与 entity 模块中的数据库实体分离：storage 层负责二者之间的转换，
//! 关联实体的展示字段（用户名、课程标题）在读取时一并填充。

pub mod common;

pub mod courses;
pub mod enrollments;
pub mod homeworks;
pub mod lessons;
pub mod materials;
pub mod pricing;
pub mod ratings;
pub mod schedules;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::{PaginationInfo, PaginationQuery};
