//! 课时存储操作

use super::SeaOrmStorage;
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::lessons::{
    entities::Lesson,
    requests::{CreateLessonRequest, UpdateLessonRequest},
};
use crate::utils::validate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课时
    pub async fn create_lesson_impl(&self, req: CreateLessonRequest) -> Result<Lesson> {
        validate::validate_lesson_duration(req.duration_secs)
            .map_err(EnglishSchoolError::validation)?;

        // 先确认课程存在，顺带取展示用的课程标题
        let course_title = self.get_course_title_impl(req.course_id).await?;

        let model = ActiveModel {
            course_id: Set(req.course_id),
            lesson_number: Set(req.lesson_number),
            title: Set(req.title),
            duration_secs: Set(req.duration_secs),
            completed: Set(false),
            ..Default::default()
        };

        // 同一课程内课时序号唯一，冲突由唯一索引报出
        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建课时失败: {e}")))?;

        Ok(result.into_lesson(course_title))
    }

    /// 通过 ID 获取课时
    pub async fn get_lesson_by_id_impl(&self, id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课时失败: {e}")))?;

        match result {
            Some(lesson) => {
                let course_title = self.get_course_title_impl(lesson.course_id).await?;
                Ok(Some(lesson.into_lesson(course_title)))
            }
            None => Ok(None),
        }
    }

    /// 按序号列出课程的课时
    pub async fn list_course_lessons_impl(&self, course_id: i64) -> Result<Vec<Lesson>> {
        let course_title = self.get_course_title_impl(course_id).await?;

        let lessons = Lessons::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::LessonNumber)
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课时列表失败: {e}")))?;

        Ok(lessons
            .into_iter()
            .map(|m| m.into_lesson(course_title.clone()))
            .collect())
    }

    /// 更新课时
    pub async fn update_lesson_impl(
        &self,
        id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        // 先检查课时是否存在
        let existing = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课时失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.lesson_number.is_none()
            && update.title.is_none()
            && update.duration_secs.is_none()
            && update.completed.is_none()
        {
            return self.get_lesson_by_id_impl(id).await;
        }

        if let Some(duration_secs) = update.duration_secs {
            validate::validate_lesson_duration(duration_secs)
                .map_err(EnglishSchoolError::validation)?;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(lesson_number) = update.lesson_number {
            model.lesson_number = Set(lesson_number);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(duration_secs) = update.duration_secs {
            model.duration_secs = Set(duration_secs);
        }

        if let Some(completed) = update.completed {
            model.completed = Set(completed);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新课时失败: {e}")))?;

        self.get_lesson_by_id_impl(id).await
    }

    /// 删除课时
    pub async fn delete_lesson_impl(&self, id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除课时失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
