//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "homeworks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub file: String,
    pub student_id: i64,
    pub course_id: i64,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_homework(
        self,
        student_username: String,
        course_title: String,
    ) -> crate::models::homeworks::entities::Homework {
        use chrono::{DateTime, Utc};

        crate::models::homeworks::entities::Homework {
            id: self.id,
            file: self.file,
            student_id: self.student_id,
            student_username,
            course_id: self.course_id,
            course_title,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
        }
    }
}
