//! English School - 英语学校管理系统数据层
//!
//! 基于 SeaORM 构建的学校管理数据层：学生、教师、课程、课时、
//! 报名、时段预约、作业、定价与评价。Web 层、鉴权与文件上传
//! 属于外部协作方，仅通过 Storage trait 读写这里定义的实体。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `logging`: 日志初始化
//! - `models`: 数据模型定义
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod logging;
pub mod models;
pub mod storage;
pub mod utils;
