use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（身份服务落库后的本地锚点）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 删除用户（学生档案、教师身份、约课记录级联删除）
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// 学生档案管理方法
    // 创建学生档案
    async fn create_student_profile(
        &self,
        profile: CreateStudentProfileRequest,
    ) -> Result<StudentProfile>;
    // 通过ID获取学生档案
    async fn get_student_profile_by_id(&self, id: i64) -> Result<Option<StudentProfile>>;
    // 通过用户ID获取学生档案
    async fn get_student_profile_by_user_id(&self, user_id: i64) -> Result<Option<StudentProfile>>;
    // 更新学生档案
    async fn update_student_profile(
        &self,
        id: i64,
        update: UpdateStudentProfileRequest,
    ) -> Result<Option<StudentProfile>>;
    // 删除学生档案
    async fn delete_student_profile(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过用户ID获取教师
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    // 更新教师
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    // 删除教师（其课程保留，teacher_id 置空）
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程（课时、资料、报名、时段、作业、评价级联删除）
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 课时管理方法
    // 创建课时
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson>;
    // 通过ID获取课时
    async fn get_lesson_by_id(&self, id: i64) -> Result<Option<Lesson>>;
    // 按序号列出课程的课时
    async fn list_course_lessons(&self, course_id: i64) -> Result<Vec<Lesson>>;
    // 更新课时
    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>>;
    // 删除课时
    async fn delete_lesson(&self, id: i64) -> Result<bool>;

    /// 课程资料管理方法
    // 添加课程资料
    async fn add_course_material(
        &self,
        material: AddCourseMaterialRequest,
    ) -> Result<CourseMaterial>;
    // 通过ID获取课程资料
    async fn get_course_material_by_id(&self, id: i64) -> Result<Option<CourseMaterial>>;
    // 列出课程的资料
    async fn list_course_materials(&self, course_id: i64) -> Result<Vec<CourseMaterial>>;
    // 删除课程资料
    async fn delete_course_material(&self, id: i64) -> Result<bool>;

    /// 报名管理方法
    // 学生报名课程
    async fn enroll_student(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 通过ID获取报名记录
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    // 列出报名记录
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    // 更新报名记录（date_enrolled 不可变）
    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>>;
    // 取消报名
    async fn cancel_enrollment(&self, id: i64) -> Result<bool>;

    /// 时段管理方法
    // 创建时段
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<Schedule>;
    // 通过ID获取时段
    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<Schedule>>;
    // 列出课程的时段
    async fn list_course_schedules(
        &self,
        course_id: i64,
        only_available: bool,
    ) -> Result<Vec<Schedule>>;
    // 更新时段
    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<Schedule>>;
    // 删除时段（约课记录级联删除）
    async fn delete_schedule(&self, id: i64) -> Result<bool>;

    /// 约课管理方法
    // 用户预约时段
    async fn book_class(&self, booking: BookClassRequest) -> Result<ScheduledClass>;
    // 通过ID获取约课记录
    async fn get_scheduled_class_by_id(&self, id: i64) -> Result<Option<ScheduledClass>>;
    // 列出用户的约课记录
    async fn list_user_scheduled_classes(&self, user_id: i64) -> Result<Vec<ScheduledClass>>;
    // 更新约课记录
    async fn update_scheduled_class(
        &self,
        id: i64,
        update: UpdateScheduledClassRequest,
    ) -> Result<Option<ScheduledClass>>;
    // 取消约课
    async fn cancel_scheduled_class(&self, id: i64) -> Result<bool>;

    /// 定价管理方法
    // 创建定价
    async fn create_pricing(&self, pricing: CreatePricingRequest) -> Result<Pricing>;
    // 通过课程类别获取定价
    async fn get_pricing_by_course_type(&self, course_type: &str) -> Result<Option<Pricing>>;
    // 列出全部定价
    async fn list_pricing(&self) -> Result<Vec<Pricing>>;
    // 更新定价
    async fn update_pricing(
        &self,
        id: i64,
        update: UpdatePricingRequest,
    ) -> Result<Option<Pricing>>;
    // 删除定价
    async fn delete_pricing(&self, id: i64) -> Result<bool>;

    /// 折扣码管理方法
    // 创建折扣码（code 为空时自动生成）
    async fn create_discount_code(&self, code: CreateDiscountCodeRequest) -> Result<DiscountCode>;
    // 通过折扣码文本获取折扣码
    async fn get_discount_code_by_code(&self, code: &str) -> Result<Option<DiscountCode>>;
    // 列出全部折扣码
    async fn list_discount_codes(&self) -> Result<Vec<DiscountCode>>;
    // 删除折扣码
    async fn delete_discount_code(&self, id: i64) -> Result<bool>;

    /// 作业管理方法
    // 提交作业
    async fn submit_homework(&self, homework: SubmitHomeworkRequest) -> Result<Homework>;
    // 通过ID获取作业
    async fn get_homework_by_id(&self, id: i64) -> Result<Option<Homework>>;
    // 列出作业
    async fn list_homeworks_with_pagination(
        &self,
        query: HomeworkListQuery,
    ) -> Result<HomeworkListResponse>;
    // 删除作业
    async fn delete_homework(&self, id: i64) -> Result<bool>;

    /// 评价管理方法
    // 学生评价课程
    async fn rate_course(&self, rating: CreateRatingRequest) -> Result<Rating>;
    // 通过ID获取评价
    async fn get_rating_by_id(&self, id: i64) -> Result<Option<Rating>>;
    // 列出课程的评价
    async fn list_course_ratings(&self, course_id: i64) -> Result<Vec<Rating>>;
    // 更新评价
    async fn update_rating(&self, id: i64, update: UpdateRatingRequest) -> Result<Option<Rating>>;
    // 删除评价
    async fn delete_rating(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
