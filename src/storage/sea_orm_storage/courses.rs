//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{EnglishSchoolError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        // 指定了教师时先确认教师存在
        if let Some(teacher_id) = req.teacher_id {
            Teachers::find_by_id(teacher_id)
                .one(&self.db)
                .await
                .map_err(|e| EnglishSchoolError::database_operation(format!("查询教师失败: {e}")))?
                .ok_or_else(|| EnglishSchoolError::not_found(format!("教师不存在: {teacher_id}")))?;
        }

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            course_type: Set(req.course_type),
            lessons_count: Set(req.lessons_count),
            materials: Set(req.materials),
            image: Set(req.image),
            teacher_id: Set(req.teacher_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        // 类别筛选
        if let Some(ref course_type) = query.course_type {
            select = select.filter(Column::CourseType.eq(course_type.as_str()));
        }

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 排序
        select = select.order_by_asc(Column::Title);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.title.is_none()
            && update.description.is_none()
            && update.course_type.is_none()
            && update.lessons_count.is_none()
            && update.materials.is_none()
            && update.image.is_none()
            && update.teacher_id.is_none()
        {
            return Ok(existing);
        }

        // 变更教师时先确认教师存在
        if let Some(teacher_id) = update.teacher_id {
            Teachers::find_by_id(teacher_id)
                .one(&self.db)
                .await
                .map_err(|e| EnglishSchoolError::database_operation(format!("查询教师失败: {e}")))?
                .ok_or_else(|| EnglishSchoolError::not_found(format!("教师不存在: {teacher_id}")))?;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(course_type) = update.course_type {
            model.course_type = Set(course_type);
        }

        if let Some(lessons_count) = update.lessons_count {
            model.lessons_count = Set(lessons_count);
        }

        if let Some(materials) = update.materials {
            model.materials = Set(materials);
        }

        if let Some(image) = update.image {
            model.image = Set(Some(image));
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程
    ///
    /// 课时、资料、报名、时段、作业、评价随外键动作一并删除。
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 查询课程标题（供关联实体填充展示字段）
    pub(crate) async fn get_course_title_impl(&self, course_id: i64) -> Result<String> {
        let course = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课程失败: {e}")))?
            .ok_or_else(|| EnglishSchoolError::not_found(format!("课程不存在: {course_id}")))?;

        Ok(course.title)
    }
}
