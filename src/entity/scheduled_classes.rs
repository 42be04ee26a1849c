//! 约课实体
//!
//! user_id 直接引用 users 而不是 student_profiles：
//! 允许尚未建立学生档案的用户预约试听课。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduled_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub schedule_id: i64,
    pub enrolled_at: i64,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::schedules::Entity",
        from = "Column::ScheduleId",
        to = "super::schedules::Column::Id"
    )]
    Schedule,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_scheduled_class(
        self,
        username: String,
        course_title: String,
        time_slot: chrono::DateTime<chrono::Utc>,
    ) -> crate::models::schedules::entities::ScheduledClass {
        use chrono::{DateTime, Utc};

        crate::models::schedules::entities::ScheduledClass {
            id: self.id,
            user_id: self.user_id,
            username,
            schedule_id: self.schedule_id,
            course_title,
            time_slot,
            enrolled_at: DateTime::<Utc>::from_timestamp(self.enrolled_at, 0).unwrap_or_default(),
            completed: self.completed,
        }
    }
}
