//! 报名存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::student_profiles::{Column as StudentColumn, Entity as StudentProfiles};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{EnglishSchoolError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListQuery, UpdateEnrollmentRequest},
        responses::EnrollmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 学生报名课程
    pub async fn enroll_student_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        // 先确认学生与课程都存在，顺带取展示字段
        let student_username = self.get_student_username_impl(req.student_id).await?;
        let course_title = self.get_course_title_impl(req.course_id).await?;

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            date_enrolled: Set(now),
            expiry_date: Set(req.expiry_date),
            payment_confirmed: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("创建报名失败: {e}")))?;

        Ok(result.into_enrollment(student_username, course_title))
    }

    /// 通过 ID 获取报名记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询报名失败: {e}")))?;

        match result {
            Some(enrollment) => {
                let student_username = self.get_student_username_impl(enrollment.student_id).await?;
                let course_title = self.get_course_title_impl(enrollment.course_id).await?;
                Ok(Some(enrollment.into_enrollment(student_username, course_title)))
            }
            None => Ok(None),
        }
    }

    /// 分页列出报名记录
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Enrollments::find();

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 课程筛选
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 付款状态筛选
        if let Some(payment_confirmed) = query.payment_confirmed {
            select = select.filter(Column::PaymentConfirmed.eq(payment_confirmed));
        }

        // 排序
        select = select.order_by_desc(Column::DateEnrolled);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询报名总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询报名页数失败: {e}")))?;

        let enrollments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询报名列表失败: {e}")))?;

        // 批量补齐展示字段
        let student_ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();
        let course_ids: Vec<i64> = enrollments.iter().map(|e| e.course_id).collect();

        let usernames = self.student_usernames_by_ids_impl(&student_ids).await?;
        let titles = self.course_titles_by_ids_impl(&course_ids).await?;

        Ok(EnrollmentListResponse {
            items: enrollments
                .into_iter()
                .map(|m| {
                    let username = usernames.get(&m.student_id).cloned().unwrap_or_default();
                    let title = titles.get(&m.course_id).cloned().unwrap_or_default();
                    m.into_enrollment(username, title)
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

    /// 更新报名记录
    ///
    /// date_enrolled 在创建时写入，这里永远不会改动。
    pub async fn update_enrollment_impl(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        // 先检查报名记录是否存在
        let existing = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询报名失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        // 没有任何变更时直接返回当前记录
        if update.expiry_date.is_none() && update.payment_confirmed.is_none() {
            return self.get_enrollment_by_id_impl(id).await;
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(expiry_date) = update.expiry_date {
            model.expiry_date = Set(Some(expiry_date));
        }

        if let Some(payment_confirmed) = update.payment_confirmed {
            model.payment_confirmed = Set(payment_confirmed);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("更新报名失败: {e}")))?;

        self.get_enrollment_by_id_impl(id).await
    }

    /// 取消报名
    pub async fn cancel_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("删除报名失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量查询学生用户名（student_id -> username）
    pub(crate) async fn student_usernames_by_ids_impl(
        &self,
        student_ids: &[i64],
    ) -> Result<HashMap<i64, String>> {
        if student_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let profiles = StudentProfiles::find()
            .filter(StudentColumn::Id.is_in(student_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询学生档案失败: {e}")))?;

        let user_ids: Vec<i64> = profiles.iter().map(|p| p.user_id).collect();
        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询用户失败: {e}")))?;

        let usernames: HashMap<i64, String> =
            users.into_iter().map(|u| (u.id, u.username)).collect();

        Ok(profiles
            .into_iter()
            .filter_map(|p| usernames.get(&p.user_id).map(|n| (p.id, n.clone())))
            .collect())
    }

    /// 批量查询课程标题（course_id -> title）
    pub(crate) async fn course_titles_by_ids_impl(
        &self,
        course_ids: &[i64],
    ) -> Result<HashMap<i64, String>> {
        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let courses = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(courses.into_iter().map(|c| (c.id, c.title)).collect())
    }
}
