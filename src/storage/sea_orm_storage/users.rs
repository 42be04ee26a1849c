//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::utils::validate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        validate::validate_username(&req.username).map_err(EnglishSchoolError::validation)?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 查询用户名（供关联实体填充展示字段）
    pub(crate) async fn get_username_by_user_id_impl(&self, user_id: i64) -> Result<String> {
        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询用户失败: {e}")))?
            .ok_or_else(|| EnglishSchoolError::not_found(format!("用户不存在: {user_id}")))?;

        Ok(user.username)
    }
}
