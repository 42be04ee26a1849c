//! 课程资料存储操作

use super::SeaOrmStorage;
use crate::entity::course_materials::{ActiveModel, Column, Entity as CourseMaterials};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::materials::{entities::CourseMaterial, requests::AddCourseMaterialRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 添加课程资料
    pub async fn add_course_material_impl(
        &self,
        req: AddCourseMaterialRequest,
    ) -> Result<CourseMaterial> {
        // 先确认课程存在，顺带取展示用的课程标题
        let course_title = self.get_course_title_impl(req.course_id).await?;

        let model = ActiveModel {
            course_id: Set(req.course_id),
            material_file: Set(req.material_file),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EnglishSchoolError::database_operation(format!("添加课程资料失败: {e}"))
        })?;

        Ok(result.into_course_material(course_title))
    }

    /// 通过 ID 获取课程资料
    pub async fn get_course_material_by_id_impl(&self, id: i64) -> Result<Option<CourseMaterial>> {
        let result = CourseMaterials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("查询课程资料失败: {e}"))
            })?;

        match result {
            Some(material) => {
                let course_title = self.get_course_title_impl(material.course_id).await?;
                Ok(Some(material.into_course_material(course_title)))
            }
            None => Ok(None),
        }
    }

    /// 列出课程的资料
    pub async fn list_course_materials_impl(&self, course_id: i64) -> Result<Vec<CourseMaterial>> {
        let course_title = self.get_course_title_impl(course_id).await?;

        let materials = CourseMaterials::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("查询课程资料列表失败: {e}"))
            })?;

        Ok(materials
            .into_iter()
            .map(|m| m.into_course_material(course_title.clone()))
            .collect())
    }

    /// 删除课程资料
    pub async fn delete_course_material_impl(&self, id: i64) -> Result<bool> {
        let result = CourseMaterials::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("删除课程资料失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
