//! 学生档案存储操作

use super::SeaOrmStorage;
use crate::entity::student_profiles::{ActiveModel, Column, Entity as StudentProfiles};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::students::{
    entities::StudentProfile,
    requests::{CreateStudentProfileRequest, UpdateStudentProfileRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建学生档案
    pub async fn create_student_profile_impl(
        &self,
        req: CreateStudentProfileRequest,
    ) -> Result<StudentProfile> {
        // 先确认用户存在，顺带取展示用的用户名
        let username = self.get_username_by_user_id_impl(req.user_id).await?;

        let model = ActiveModel {
            user_id: Set(req.user_id),
            age: Set(req.age),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EnglishSchoolError::database_operation(format!("创建学生档案失败: {e}"))
        })?;

        Ok(result.into_student_profile(username))
    }

    /// 通过 ID 获取学生档案
    pub async fn get_student_profile_by_id_impl(&self, id: i64) -> Result<Option<StudentProfile>> {
        let result = StudentProfiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("查询学生档案失败: {e}"))
            })?;

        match result {
            Some(profile) => {
                let username = self.get_username_by_user_id_impl(profile.user_id).await?;
                Ok(Some(profile.into_student_profile(username)))
            }
            None => Ok(None),
        }
    }

    /// 通过用户 ID 获取学生档案
    pub async fn get_student_profile_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>> {
        let result = StudentProfiles::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("查询学生档案失败: {e}"))
            })?;

        match result {
            Some(profile) => {
                let username = self.get_username_by_user_id_impl(profile.user_id).await?;
                Ok(Some(profile.into_student_profile(username)))
            }
            None => Ok(None),
        }
    }

    /// 更新学生档案
    pub async fn update_student_profile_impl(
        &self,
        id: i64,
        update: UpdateStudentProfileRequest,
    ) -> Result<Option<StudentProfile>> {
        // 先检查学生档案是否存在
        let existing = StudentProfiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("查询学生档案失败: {e}"))
            })?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.age.is_none() {
            return self.get_student_profile_by_id_impl(id).await;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(age) = update.age {
            model.age = Set(age);
        }

        model.update(&self.db).await.map_err(|e| {
            EnglishSchoolError::database_operation(format!("更新学生档案失败: {e}"))
        })?;

        self.get_student_profile_by_id_impl(id).await
    }

    /// 删除学生档案
    pub async fn delete_student_profile_impl(&self, id: i64) -> Result<bool> {
        let result = StudentProfiles::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                EnglishSchoolError::database_operation(format!("删除学生档案失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 查询学生档案及其用户名（供关联实体填充展示字段）
    pub(crate) async fn get_student_username_impl(&self, student_id: i64) -> Result<String> {
        let profile = StudentProfiles::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询学生档案失败: {e}")))?
            .ok_or_else(|| EnglishSchoolError::not_found(format!("学生档案不存在: {student_id}")))?;

        self.get_username_by_user_id_impl(profile.user_id).await
    }
}
