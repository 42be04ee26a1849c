//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        // 先确认用户存在，顺带取展示用的用户名
        let username = self.get_username_by_user_id_impl(req.user_id).await?;

        let model = ActiveModel {
            user_id: Set(req.user_id),
            subject: Set(req.subject),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher(username))
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(teacher) => {
                let username = self.get_username_by_user_id_impl(teacher.user_id).await?;
                Ok(Some(teacher.into_teacher(username)))
            }
            None => Ok(None),
        }
    }

    /// 通过用户 ID 获取教师
    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(teacher) => {
                let username = self.get_username_by_user_id_impl(teacher.user_id).await?;
                Ok(Some(teacher.into_teacher(username)))
            }
            None => Ok(None),
        }
    }

    /// 更新教师
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        // 先检查教师是否存在
        let existing = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询教师失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.subject.is_none() {
            return self.get_teacher_by_id_impl(id).await;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师
    ///
    /// 其名下课程保留，courses.teacher_id 由外键动作置空。
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
