//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::{
    PaginationInfo,
    homeworks::{
        entities::Homework,
        requests::{HomeworkListQuery, SubmitHomeworkRequest},
        responses::HomeworkListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 提交作业
    pub async fn submit_homework_impl(&self, req: SubmitHomeworkRequest) -> Result<Homework> {
        // 先确认学生与课程都存在，顺带取展示字段
        let student_username = self.get_student_username_impl(req.student_id).await?;
        let course_title = self.get_course_title_impl(req.course_id).await?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            file: Set(req.file),
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("提交作业失败: {e}")))?;

        Ok(result.into_homework(student_username, course_title))
    }

    /// 通过 ID 获取作业
    pub async fn get_homework_by_id_impl(&self, id: i64) -> Result<Option<Homework>> {
        let result = Homeworks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询作业失败: {e}")))?;

        match result {
            Some(homework) => {
                let student_username = self.get_student_username_impl(homework.student_id).await?;
                let course_title = self.get_course_title_impl(homework.course_id).await?;
                Ok(Some(homework.into_homework(student_username, course_title)))
            }
            None => Ok(None),
        }
    }

    /// 分页列出作业
    pub async fn list_homeworks_with_pagination_impl(
        &self,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Homeworks::find();

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 课程筛选
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 排序
        select = select.order_by_desc(Column::SubmittedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询作业页数失败: {e}")))?;

        let homeworks = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询作业列表失败: {e}")))?;

        // 批量补齐展示字段
        let student_ids: Vec<i64> = homeworks.iter().map(|h| h.student_id).collect();
        let course_ids: Vec<i64> = homeworks.iter().map(|h| h.course_id).collect();

        let usernames = self.student_usernames_by_ids_impl(&student_ids).await?;
        let titles = self.course_titles_by_ids_impl(&course_ids).await?;

        Ok(HomeworkListResponse {
            items: homeworks
                .into_iter()
                .map(|m| {
                    let username = usernames.get(&m.student_id).cloned().unwrap_or_default();
                    let title = titles.get(&m.course_id).cloned().unwrap_or_default();
                    m.into_homework(username, title)
                })
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除作业
    pub async fn delete_homework_impl(&self, id: i64) -> Result<bool> {
        let result = Homeworks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
