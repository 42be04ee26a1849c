//! 时段与约课存储操作

use super::SeaOrmStorage;
use crate::entity::scheduled_classes::{
    ActiveModel as ScheduledClassActiveModel, Column as ScheduledClassColumn,
    Entity as ScheduledClasses,
};
use crate::entity::schedules::{ActiveModel, Column, Entity as Schedules};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::schedules::{
    entities::{Schedule, ScheduledClass},
    requests::{
        BookClassRequest, CreateScheduleRequest, UpdateScheduleRequest,
        UpdateScheduledClassRequest,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建时段
    pub async fn create_schedule_impl(&self, req: CreateScheduleRequest) -> Result<Schedule> {
        // 先确认课程存在，顺带取展示用的课程标题
        let course_title = self.get_course_title_impl(req.course_id).await?;

        let model = ActiveModel {
            course_id: Set(req.course_id),
            time_slot: Set(req.time_slot.timestamp()),
            available: Set(true),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建时段失败: {e}")))?;

        Ok(result.into_schedule(course_title))
    }

    /// 通过 ID 获取时段
    pub async fn get_schedule_by_id_impl(&self, id: i64) -> Result<Option<Schedule>> {
        let result = Schedules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询时段失败: {e}")))?;

        match result {
            Some(schedule) => {
                let course_title = self.get_course_title_impl(schedule.course_id).await?;
                Ok(Some(schedule.into_schedule(course_title)))
            }
            None => Ok(None),
        }
    }

    /// 列出课程的时段
    pub async fn list_course_schedules_impl(
        &self,
        course_id: i64,
        only_available: bool,
    ) -> Result<Vec<Schedule>> {
        let course_title = self.get_course_title_impl(course_id).await?;

        let mut select = Schedules::find().filter(Column::CourseId.eq(course_id));

        if only_available {
            select = select.filter(Column::Available.eq(true));
        }

        let schedules = select
            .order_by_asc(Column::TimeSlot)
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询时段列表失败: {e}")))?;

        Ok(schedules
            .into_iter()
            .map(|m| m.into_schedule(course_title.clone()))
            .collect())
    }

    /// 更新时段
    pub async fn update_schedule_impl(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<Schedule>> {
        // 先检查时段是否存在
        let existing = Schedules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询时段失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.time_slot.is_none() && update.available.is_none() {
            return self.get_schedule_by_id_impl(id).await;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(time_slot) = update.time_slot {
            model.time_slot = Set(time_slot.timestamp());
        }

        if let Some(available) = update.available {
            model.available = Set(available);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新时段失败: {e}")))?;

        self.get_schedule_by_id_impl(id).await
    }

    /// 删除时段
    ///
    /// 关联的约课记录随外键动作一并删除。
    pub async fn delete_schedule_impl(&self, id: i64) -> Result<bool> {
        let result = Schedules::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除时段失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 用户预约时段
    pub async fn book_class_impl(&self, req: BookClassRequest) -> Result<ScheduledClass> {
        // 先确认用户与时段都存在，顺带取展示字段
        let username = self.get_username_by_user_id_impl(req.user_id).await?;
        let schedule = Schedules::find_by_id(req.schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询时段失败: {e}")))?
            .ok_or_else(|| {
                EnglishSchoolError::not_found(format!("时段不存在: {}", req.schedule_id))
            })?;
        let course_title = self.get_course_title_impl(schedule.course_id).await?;

        let now = chrono::Utc::now().timestamp();

        let model = ScheduledClassActiveModel {
            user_id: Set(req.user_id),
            schedule_id: Set(req.schedule_id),
            enrolled_at: Set(now),
            completed: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建约课失败: {e}")))?;

        let time_slot = chrono::DateTime::<chrono::Utc>::from_timestamp(schedule.time_slot, 0)
            .unwrap_or_default();

        Ok(result.into_scheduled_class(username, course_title, time_slot))
    }

    /// 通过 ID 获取约课记录
    pub async fn get_scheduled_class_by_id_impl(&self, id: i64) -> Result<Option<ScheduledClass>> {
        let result = ScheduledClasses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询约课失败: {e}")))?;

        match result {
            Some(scheduled) => {
                let username = self.get_username_by_user_id_impl(scheduled.user_id).await?;
                let schedule = Schedules::find_by_id(scheduled.schedule_id)
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        EnglishSchoolError::database_operation(format!("查询时段失败: {e}"))
                    })?
                    .ok_or_else(|| {
                        EnglishSchoolError::not_found(format!(
                            "时段不存在: {}",
                            scheduled.schedule_id
                        ))
                    })?;
                let course_title = self.get_course_title_impl(schedule.course_id).await?;
                let time_slot =
                    chrono::DateTime::<chrono::Utc>::from_timestamp(schedule.time_slot, 0)
                        .unwrap_or_default();

                Ok(Some(scheduled.into_scheduled_class(
                    username,
                    course_title,
                    time_slot,
                )))
            }
            None => Ok(None),
        }
    }

    /// 列出用户的约课记录
    pub async fn list_user_scheduled_classes_impl(
        &self,
        user_id: i64,
    ) -> Result<Vec<ScheduledClass>> {
        let username = self.get_username_by_user_id_impl(user_id).await?;

        let scheduled = ScheduledClasses::find()
            .filter(ScheduledClassColumn::UserId.eq(user_id))
            .order_by_desc(ScheduledClassColumn::EnrolledAt)
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询约课列表失败: {e}")))?;

        // 补齐时段与课程展示字段
        let schedule_ids: Vec<i64> = scheduled.iter().map(|s| s.schedule_id).collect();
        let schedules = Schedules::find()
            .filter(Column::Id.is_in(schedule_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询时段失败: {e}")))?;

        let course_ids: Vec<i64> = schedules.iter().map(|s| s.course_id).collect();
        let titles = self.course_titles_by_ids_impl(&course_ids).await?;

        let schedule_info: std::collections::HashMap<i64, (String, i64)> = schedules
            .into_iter()
            .map(|s| {
                let title = titles.get(&s.course_id).cloned().unwrap_or_default();
                (s.id, (title, s.time_slot))
            })
            .collect();

        Ok(scheduled
            .into_iter()
            .map(|m| {
                let (course_title, time_slot) = schedule_info
                    .get(&m.schedule_id)
                    .cloned()
                    .unwrap_or_default();
                let time_slot =
                    chrono::DateTime::<chrono::Utc>::from_timestamp(time_slot, 0).unwrap_or_default();
                m.into_scheduled_class(username.clone(), course_title, time_slot)
            })
            .collect())
    }

    /// 更新约课记录
    pub async fn update_scheduled_class_impl(
        &self,
        id: i64,
        update: UpdateScheduledClassRequest,
    ) -> Result<Option<ScheduledClass>> {
        // 先检查约课记录是否存在
        let existing = ScheduledClasses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询约课失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.completed.is_none() {
            return self.get_scheduled_class_by_id_impl(id).await;
        }

        let mut model = ScheduledClassActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(completed) = update.completed {
            model.completed = Set(completed);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新约课失败: {e}")))?;

        self.get_scheduled_class_by_id_impl(id).await
    }

    /// 取消约课
    pub async fn cancel_scheduled_class_impl(&self, id: i64) -> Result<bool> {
        let result = ScheduledClasses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除约课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
