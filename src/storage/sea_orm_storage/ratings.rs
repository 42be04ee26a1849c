//! 评价存储操作

use super::SeaOrmStorage;
use crate::entity::ratings::{ActiveModel, Column, Entity as Ratings};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::ratings::{
    entities::Rating,
    requests::{CreateRatingRequest, UpdateRatingRequest},
};
use crate::utils::validate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 学生评价课程
    pub async fn rate_course_impl(&self, req: CreateRatingRequest) -> Result<Rating> {
        validate::validate_rating_score(req.score).map_err(EnglishSchoolError::validation)?;

        // 先确认学生与课程都存在，顺带取展示字段
        let student_username = self.get_student_username_impl(req.student_id).await?;
        let course_title = self.get_course_title_impl(req.course_id).await?;

        let model = ActiveModel {
            course_id: Set(req.course_id),
            student_id: Set(req.student_id),
            score: Set(req.score),
            comment: Set(req.comment),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建评价失败: {e}")))?;

        Ok(result.into_rating(student_username, course_title))
    }

    /// 通过 ID 获取评价
    pub async fn get_rating_by_id_impl(&self, id: i64) -> Result<Option<Rating>> {
        let result = Ratings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询评价失败: {e}")))?;

        match result {
            Some(rating) => {
                let student_username = self.get_student_username_impl(rating.student_id).await?;
                let course_title = self.get_course_title_impl(rating.course_id).await?;
                Ok(Some(rating.into_rating(student_username, course_title)))
            }
            None => Ok(None),
        }
    }

    /// 列出课程的评价
    pub async fn list_course_ratings_impl(&self, course_id: i64) -> Result<Vec<Rating>> {
        let course_title = self.get_course_title_impl(course_id).await?;

        let ratings = Ratings::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询评价列表失败: {e}")))?;

        // 批量补齐学生用户名
        let student_ids: Vec<i64> = ratings.iter().map(|r| r.student_id).collect();
        let usernames = self.student_usernames_by_ids_impl(&student_ids).await?;

        Ok(ratings
            .into_iter()
            .map(|m| {
                let username = usernames.get(&m.student_id).cloned().unwrap_or_default();
                m.into_rating(username, course_title.clone())
            })
            .collect())
    }

    /// 更新评价
    pub async fn update_rating_impl(
        &self,
        id: i64,
        update: UpdateRatingRequest,
    ) -> Result<Option<Rating>> {
        // 先检查评价是否存在
        let existing = Ratings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询评价失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.score.is_none() && update.comment.is_none() {
            return self.get_rating_by_id_impl(id).await;
        }

        if let Some(score) = update.score {
            validate::validate_rating_score(score).map_err(EnglishSchoolError::validation)?;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(score) = update.score {
            model.score = Set(score);
        }

        if let Some(comment) = update.comment {
            model.comment = Set(Some(comment));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新评价失败: {e}")))?;

        self.get_rating_by_id_impl(id).await
    }

    /// 删除评价
    pub async fn delete_rating_impl(&self, id: i64) -> Result<bool> {
        let result = Ratings::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
