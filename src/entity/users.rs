//! 用户实体
//!
//! 账号本体（密码、邮箱、角色）由外部身份服务管理，这里只保留
//! 外键与展示标签所需的最小字段。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::student_profiles::Entity")]
    StudentProfile,
    #[sea_orm(has_one = "super::teachers::Entity")]
    Teacher,
    #[sea_orm(has_many = "super::scheduled_classes::Entity")]
    ScheduledClasses,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::scheduled_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduledClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::User;
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
