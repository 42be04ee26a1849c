//! 评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub student_id: i64,
    pub score: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    Student,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_rating(
        self,
        student_username: String,
        course_title: String,
    ) -> crate::models::ratings::entities::Rating {
        crate::models::ratings::entities::Rating {
            id: self.id,
            course_id: self.course_id,
            course_title,
            student_id: self.student_id,
            student_username,
            score: self.score,
            comment: self.comment,
        }
    }
}
