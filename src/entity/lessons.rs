//! 课时实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub lesson_number: i32,
    pub title: String,
    pub duration_secs: i64,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_lesson(self, course_title: String) -> crate::models::lessons::entities::Lesson {
        crate::models::lessons::entities::Lesson {
            id: self.id,
            course_id: self.course_id,
            course_title,
            lesson_number: self.lesson_number,
            title: self.title,
            duration_secs: self.duration_secs,
            completed: self.completed,
        }
    }
}
