//! 定价实体
//!
//! course_type 是自由文本，不是指向 courses.course_type 的外键。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pricing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_pricing(self) -> crate::models::pricing::entities::Pricing {
        crate::models::pricing::entities::Pricing {
            id: self.id,
            course_type: self.course_type,
            price: self.price,
        }
    }
}
