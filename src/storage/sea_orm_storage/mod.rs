//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod enrollments;
mod homeworks;
mod lessons;
mod materials;
mod pricing;
mod ratings;
mod schedules;
mod students;
mod teachers;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{EnglishSchoolError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EnglishSchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EnglishSchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EnglishSchoolError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EnglishSchoolError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 内存数据库实例（仅测试用）
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| EnglishSchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true);

        // 内存库必须单连接，否则每个连接各自是一个空库
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opt)
            .await
            .map_err(|e| EnglishSchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

        Migrator::up(&db, None)
            .await
            .map_err(|e| EnglishSchoolError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }
}

// Storage trait 实现
use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListQuery, UpdateEnrollmentRequest},
        responses::EnrollmentListResponse,
    },
    homeworks::{
        entities::Homework,
        requests::{HomeworkListQuery, SubmitHomeworkRequest},
        responses::HomeworkListResponse,
    },
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, UpdateLessonRequest},
    },
    materials::{entities::CourseMaterial, requests::AddCourseMaterialRequest},
    pricing::{
        entities::{DiscountCode, Pricing},
        requests::{CreateDiscountCodeRequest, CreatePricingRequest, UpdatePricingRequest},
    },
    ratings::{
        entities::Rating,
        requests::{CreateRatingRequest, UpdateRatingRequest},
    },
    schedules::{
        entities::{Schedule, ScheduledClass},
        requests::{
            BookClassRequest, CreateScheduleRequest, UpdateScheduleRequest,
            UpdateScheduledClassRequest,
        },
    },
    students::{
        entities::StudentProfile,
        requests::{CreateStudentProfileRequest, UpdateStudentProfileRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    // 学生档案模块
    async fn create_student_profile(
        &self,
        profile: CreateStudentProfileRequest,
    ) -> Result<StudentProfile> {
        self.create_student_profile_impl(profile).await
    }

    async fn get_student_profile_by_id(&self, id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_profile_by_id_impl(id).await
    }

    async fn get_student_profile_by_user_id(&self, user_id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_profile_by_user_id_impl(user_id).await
    }

    async fn update_student_profile(
        &self,
        id: i64,
        update: UpdateStudentProfileRequest,
    ) -> Result<Option<StudentProfile>> {
        self.update_student_profile_impl(id, update).await
    }

    async fn delete_student_profile(&self, id: i64) -> Result<bool> {
        self.delete_student_profile_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_user_id_impl(user_id).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 课时模块
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(lesson).await
    }

    async fn get_lesson_by_id(&self, id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(id).await
    }

    async fn list_course_lessons(&self, course_id: i64) -> Result<Vec<Lesson>> {
        self.list_course_lessons_impl(course_id).await
    }

    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>> {
        self.update_lesson_impl(id, update).await
    }

    async fn delete_lesson(&self, id: i64) -> Result<bool> {
        self.delete_lesson_impl(id).await
    }

    // 课程资料模块
    async fn add_course_material(
        &self,
        material: AddCourseMaterialRequest,
    ) -> Result<CourseMaterial> {
        self.add_course_material_impl(material).await
    }

    async fn get_course_material_by_id(&self, id: i64) -> Result<Option<CourseMaterial>> {
        self.get_course_material_by_id_impl(id).await
    }

    async fn list_course_materials(&self, course_id: i64) -> Result<Vec<CourseMaterial>> {
        self.list_course_materials_impl(course_id).await
    }

    async fn delete_course_material(&self, id: i64) -> Result<bool> {
        self.delete_course_material_impl(id).await
    }

    // 报名模块
    async fn enroll_student(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.enroll_student_impl(enrollment).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_impl(id, update).await
    }

    async fn cancel_enrollment(&self, id: i64) -> Result<bool> {
        self.cancel_enrollment_impl(id).await
    }

    // 时段模块
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<Schedule> {
        self.create_schedule_impl(schedule).await
    }

    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<Schedule>> {
        self.get_schedule_by_id_impl(id).await
    }

    async fn list_course_schedules(
        &self,
        course_id: i64,
        only_available: bool,
    ) -> Result<Vec<Schedule>> {
        self.list_course_schedules_impl(course_id, only_available)
            .await
    }

    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<Schedule>> {
        self.update_schedule_impl(id, update).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_schedule_impl(id).await
    }

    // 约课模块
    async fn book_class(&self, booking: BookClassRequest) -> Result<ScheduledClass> {
        self.book_class_impl(booking).await
    }

    async fn get_scheduled_class_by_id(&self, id: i64) -> Result<Option<ScheduledClass>> {
        self.get_scheduled_class_by_id_impl(id).await
    }

    async fn list_user_scheduled_classes(&self, user_id: i64) -> Result<Vec<ScheduledClass>> {
        self.list_user_scheduled_classes_impl(user_id).await
    }

    async fn update_scheduled_class(
        &self,
        id: i64,
        update: UpdateScheduledClassRequest,
    ) -> Result<Option<ScheduledClass>> {
        self.update_scheduled_class_impl(id, update).await
    }

    async fn cancel_scheduled_class(&self, id: i64) -> Result<bool> {
        self.cancel_scheduled_class_impl(id).await
    }

    // 定价模块
    async fn create_pricing(&self, pricing: CreatePricingRequest) -> Result<Pricing> {
        self.create_pricing_impl(pricing).await
    }

    async fn get_pricing_by_course_type(&self, course_type: &str) -> Result<Option<Pricing>> {
        self.get_pricing_by_course_type_impl(course_type).await
    }

    async fn list_pricing(&self) -> Result<Vec<Pricing>> {
        self.list_pricing_impl().await
    }

    async fn update_pricing(
        &self,
        id: i64,
        update: UpdatePricingRequest,
    ) -> Result<Option<Pricing>> {
        self.update_pricing_impl(id, update).await
    }

    async fn delete_pricing(&self, id: i64) -> Result<bool> {
        self.delete_pricing_impl(id).await
    }

    // 折扣码模块
    async fn create_discount_code(&self, code: CreateDiscountCodeRequest) -> Result<DiscountCode> {
        self.create_discount_code_impl(code).await
    }

    async fn get_discount_code_by_code(&self, code: &str) -> Result<Option<DiscountCode>> {
        self.get_discount_code_by_code_impl(code).await
    }

    async fn list_discount_codes(&self) -> Result<Vec<DiscountCode>> {
        self.list_discount_codes_impl().await
    }

    async fn delete_discount_code(&self, id: i64) -> Result<bool> {
        self.delete_discount_code_impl(id).await
    }

    // 作业模块
    async fn submit_homework(&self, homework: SubmitHomeworkRequest) -> Result<Homework> {
        self.submit_homework_impl(homework).await
    }

    async fn get_homework_by_id(&self, id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(id).await
    }

    async fn list_homeworks_with_pagination(
        &self,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse> {
        self.list_homeworks_with_pagination_impl(query).await
    }

    async fn delete_homework(&self, id: i64) -> Result<bool> {
        self.delete_homework_impl(id).await
    }

    // 评价模块
    async fn rate_course(&self, rating: CreateRatingRequest) -> Result<Rating> {
        self.rate_course_impl(rating).await
    }

    async fn get_rating_by_id(&self, id: i64) -> Result<Option<Rating>> {
        self.get_rating_by_id_impl(id).await
    }

    async fn list_course_ratings(&self, course_id: i64) -> Result<Vec<Rating>> {
        self.list_course_ratings_impl(course_id).await
    }

    async fn update_rating(&self, id: i64, update: UpdateRatingRequest) -> Result<Option<Rating>> {
        self.update_rating_impl(id, update).await
    }

    async fn delete_rating(&self, id: i64) -> Result<bool> {
        self.delete_rating_impl(id).await
    }
}
