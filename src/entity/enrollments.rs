//! 报名实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    // 创建时写入，之后不再变更
    pub date_enrolled: i64,
    pub expiry_date: Option<Date>,
    pub payment_confirmed: bool,
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
    pub fn into_enrollment(
        self,
        student_username: String,
        course_title: String,
    ) -> crate::models::enrollments::entities::Enrollment {
        use chrono::{DateTime, Utc};

        crate::models::enrollments::entities::Enrollment {
            id: self.id,
            student_id: self.student_id,
            student_username,
            course_id: self.course_id,
            course_title,
            date_enrolled: DateTime::<Utc>::from_timestamp(self.date_enrolled, 0)
                .unwrap_or_default(),
            expiry_date: self.expiry_date,
            payment_confirmed: self.payment_confirmed,
        }
    }
}
