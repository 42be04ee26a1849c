//! 时段实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub time_slot: i64,
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::scheduled_classes::Entity")]
    ScheduledClasses,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
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
    pub fn into_schedule(
        self,
        course_title: String,
    ) -> crate::models::schedules::entities::Schedule {
        use chrono::{DateTime, Utc};

        crate::models::schedules::entities::Schedule {
            id: self.id,
            course_id: self.course_id,
            course_title,
            time_slot: DateTime::<Utc>::from_timestamp(self.time_slot, 0).unwrap_or_default(),
            available: self.available,
        }
    }
}
