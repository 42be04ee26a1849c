//! 存储层集成测试（内存 SQLite）

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    enrollments::requests::{CreateEnrollmentRequest, UpdateEnrollmentRequest},
    homeworks::requests::SubmitHomeworkRequest,
    lessons::requests::CreateLessonRequest,
    materials::requests::AddCourseMaterialRequest,
    pricing::requests::{CreateDiscountCodeRequest, CreatePricingRequest},
    ratings::requests::CreateRatingRequest,
    schedules::requests::{BookClassRequest, CreateScheduleRequest},
    students::{entities::StudentProfile, requests::CreateStudentProfileRequest},
    teachers::requests::CreateTeacherRequest,
    users::requests::CreateUserRequest,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::new_in_memory()
        .await
        .expect("in-memory storage")
}

async fn seed_student(storage: &SeaOrmStorage, username: &str, age: i32) -> StudentProfile {
    let user = storage
        .create_user_impl(CreateUserRequest {
            username: username.to_string(),
        })
        .await
        .expect("create user");

    storage
        .create_student_profile_impl(CreateStudentProfileRequest {
            user_id: user.id,
            age,
        })
        .await
        .expect("create student profile")
}

async fn seed_course(storage: &SeaOrmStorage, title: &str) -> Course {
    storage
        .create_course_impl(CreateCourseRequest {
            title: title.to_string(),
            description: "General English".to_string(),
            course_type: "group".to_string(),
            lessons_count: 10,
            materials: "Coursebook unit 1-10".to_string(),
            image: None,
            teacher_id: None,
        })
        .await
        .expect("create course")
}

#[tokio::test]
async fn test_course_without_teacher() {
    let storage = storage().await;

    let course = storage
        .create_course_impl(CreateCourseRequest {
            title: "Beginner English".to_string(),
            description: "A1 level".to_string(),
            course_type: "group".to_string(),
            lessons_count: 10,
            materials: "".to_string(),
            image: None,
            teacher_id: None,
        })
        .await
        .expect("create course");

    assert_eq!(course.teacher_id, None);
    assert_eq!(course.title, "Beginner English");
}

#[tokio::test]
async fn test_course_cascade_closure() {
    let storage = storage().await;
    let student = seed_student(&storage, "cascade_student", 20).await;
    let course = seed_course(&storage, "IELTS Prep").await;

    storage
        .create_lesson_impl(CreateLessonRequest {
            course_id: course.id,
            lesson_number: 1,
            title: "Introduction".to_string(),
            duration_secs: 45 * 60,
        })
        .await
        .expect("create lesson");

    storage
        .add_course_material_impl(AddCourseMaterialRequest {
            course_id: course.id,
            material_file: "course_materials/1-abc.pdf".to_string(),
            description: None,
        })
        .await
        .expect("add material");

    storage
        .enroll_student_impl(CreateEnrollmentRequest {
            student_id: student.id,
            course_id: course.id,
            expiry_date: None,
        })
        .await
        .expect("enroll");

    let schedule = storage
        .create_schedule_impl(CreateScheduleRequest {
            course_id: course.id,
            time_slot: chrono::Utc::now(),
        })
        .await
        .expect("create schedule");

    storage
        .book_class_impl(BookClassRequest {
            user_id: student.user_id,
            schedule_id: schedule.id,
        })
        .await
        .expect("book class");

    storage
        .submit_homework_impl(SubmitHomeworkRequest {
            file: "homework/1-abc.docx".to_string(),
            student_id: student.id,
            course_id: course.id,
        })
        .await
        .expect("submit homework");

    storage
        .rate_course_impl(CreateRatingRequest {
            course_id: course.id,
            student_id: student.id,
            score: 5,
            comment: None,
        })
        .await
        .expect("rate course");

    // 删除课程后，所有从属记录必须随之消失
    assert!(storage.delete_course_impl(course.id).await.expect("delete"));

    let db = &storage.db;
    assert_eq!(Lessons::find().count(db).await.unwrap(), 0);
    assert_eq!(CourseMaterials::find().count(db).await.unwrap(), 0);
    assert_eq!(Enrollments::find().count(db).await.unwrap(), 0);
    assert_eq!(Schedules::find().count(db).await.unwrap(), 0);
    assert_eq!(ScheduledClasses::find().count(db).await.unwrap(), 0);
    assert_eq!(Homeworks::find().count(db).await.unwrap(), 0);
    assert_eq!(Ratings::find().count(db).await.unwrap(), 0);

    // 学生档案与用户不受影响
    assert_eq!(StudentProfiles::find().count(db).await.unwrap(), 1);
    assert_eq!(Users::find().count(db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_date_enrolled_immutable() {
    let storage = storage().await;
    let student = seed_student(&storage, "immutable_date", 25).await;
    let course = seed_course(&storage, "Business English").await;

    let enrollment = storage
        .enroll_student_impl(CreateEnrollmentRequest {
            student_id: student.id,
            course_id: course.id,
            expiry_date: None,
        })
        .await
        .expect("enroll");

    let updated = storage
        .update_enrollment_impl(
            enrollment.id,
            UpdateEnrollmentRequest {
                expiry_date: NaiveDate::from_ymd_opt(2027, 1, 31),
                payment_confirmed: Some(true),
            },
        )
        .await
        .expect("update")
        .expect("enrollment exists");

    assert_eq!(updated.date_enrolled, enrollment.date_enrolled);
    assert!(updated.payment_confirmed);
    assert_eq!(updated.expiry_date, NaiveDate::from_ymd_opt(2027, 1, 31));
}

#[tokio::test]
async fn test_create_child_with_missing_parent_fails() {
    let storage = storage().await;

    let result = storage
        .create_lesson_impl(CreateLessonRequest {
            course_id: 999,
            lesson_number: 1,
            title: "Orphan".to_string(),
            duration_secs: 60,
        })
        .await;
    assert!(result.is_err());
    assert_eq!(Lessons::find().count(&storage.db).await.unwrap(), 0);

    let result = storage
        .enroll_student_impl(CreateEnrollmentRequest {
            student_id: 999,
            course_id: 999,
            expiry_date: None,
        })
        .await;
    assert!(result.is_err());
    assert_eq!(Enrollments::find().count(&storage.db).await.unwrap(), 0);

    let result = storage
        .book_class_impl(BookClassRequest {
            user_id: 999,
            schedule_id: 999,
        })
        .await;
    assert!(result.is_err());
    assert_eq!(ScheduledClasses::find().count(&storage.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_creation_defaults() {
    let storage = storage().await;
    let student = seed_student(&storage, "defaults_user", 19).await;
    let course = seed_course(&storage, "Grammar Basics").await;

    let schedule = storage
        .create_schedule_impl(CreateScheduleRequest {
            course_id: course.id,
            time_slot: chrono::Utc::now(),
        })
        .await
        .expect("create schedule");
    assert!(schedule.available);

    let enrollment = storage
        .enroll_student_impl(CreateEnrollmentRequest {
            student_id: student.id,
            course_id: course.id,
            expiry_date: None,
        })
        .await
        .expect("enroll");
    assert!(!enrollment.payment_confirmed);

    let lesson = storage
        .create_lesson_impl(CreateLessonRequest {
            course_id: course.id,
            lesson_number: 1,
            title: "Present Simple".to_string(),
            duration_secs: 60 * 60,
        })
        .await
        .expect("create lesson");
    assert!(!lesson.completed);

    let booked = storage
        .book_class_impl(BookClassRequest {
            user_id: student.user_id,
            schedule_id: schedule.id,
        })
        .await
        .expect("book class");
    assert!(!booked.completed);
}

#[tokio::test]
async fn test_rating_display_label() {
    let storage = storage().await;
    let student = seed_student(&storage, "ana", 22).await;
    let course = seed_course(&storage, "IELTS Prep").await;

    let rating = storage
        .rate_course_impl(CreateRatingRequest {
            course_id: course.id,
            student_id: student.id,
            score: 5,
            comment: Some("Great course".to_string()),
        })
        .await
        .expect("rate");

    assert_eq!(rating.to_string(), "ana rated IELTS Prep - 5");
}

#[tokio::test]
async fn test_enrollment_display_label() {
    let storage = storage().await;
    let student = seed_student(&storage, "boris", 30).await;
    let course = seed_course(&storage, "Conversation Club").await;

    let enrollment = storage
        .enroll_student_impl(CreateEnrollmentRequest {
            student_id: student.id,
            course_id: course.id,
            expiry_date: None,
        })
        .await
        .expect("enroll");

    assert_eq!(enrollment.to_string(), "boris enrolled in Conversation Club");
}

#[tokio::test]
async fn test_lesson_and_homework_display_labels() {
    let storage = storage().await;
    let student = seed_student(&storage, "carla", 17).await;
    let course = seed_course(&storage, "Beginner English").await;

    let lesson = storage
        .create_lesson_impl(CreateLessonRequest {
            course_id: course.id,
            lesson_number: 3,
            title: "Colours".to_string(),
            duration_secs: 30 * 60,
        })
        .await
        .expect("create lesson");
    assert_eq!(lesson.to_string(), "Colours - Lesson 3 of Beginner English");

    let homework = storage
        .submit_homework_impl(SubmitHomeworkRequest {
            file: "homework/1-def.pdf".to_string(),
            student_id: student.id,
            course_id: course.id,
        })
        .await
        .expect("submit homework");
    assert_eq!(
        homework.to_string(),
        "Homework for carla in Beginner English"
    );
}

#[tokio::test]
async fn test_delete_teacher_detaches_courses() {
    let storage = storage().await;

    let user = storage
        .create_user_impl(CreateUserRequest {
            username: "mr_smith".to_string(),
        })
        .await
        .expect("create user");

    let teacher = storage
        .create_teacher_impl(CreateTeacherRequest {
            user_id: user.id,
            subject: "English".to_string(),
        })
        .await
        .expect("create teacher");

    let course = storage
        .create_course_impl(CreateCourseRequest {
            title: "Advanced English".to_string(),
            description: "C1 level".to_string(),
            course_type: "individual".to_string(),
            lessons_count: 20,
            materials: "".to_string(),
            image: None,
            teacher_id: Some(teacher.id),
        })
        .await
        .expect("create course");
    assert_eq!(course.teacher_id, Some(teacher.id));

    // 删除教师后课程保留，teacher_id 置空
    assert!(
        storage
            .delete_teacher_impl(teacher.id)
            .await
            .expect("delete teacher")
    );

    let detached = storage
        .get_course_by_id_impl(course.id)
        .await
        .expect("get course")
        .expect("course still exists");
    assert_eq!(detached.teacher_id, None);
}

#[tokio::test]
async fn test_duplicate_lesson_number_rejected() {
    let storage = storage().await;
    let course = seed_course(&storage, "Phonetics").await;

    storage
        .create_lesson_impl(CreateLessonRequest {
            course_id: course.id,
            lesson_number: 1,
            title: "Vowels".to_string(),
            duration_secs: 60,
        })
        .await
        .expect("first lesson");

    let duplicate = storage
        .create_lesson_impl(CreateLessonRequest {
            course_id: course.id,
            lesson_number: 1,
            title: "Consonants".to_string(),
            duration_secs: 60,
        })
        .await;
    assert!(duplicate.is_err());

    // 不同课程可以使用相同序号
    let other = seed_course(&storage, "Listening").await;
    storage
        .create_lesson_impl(CreateLessonRequest {
            course_id: other.id,
            lesson_number: 1,
            title: "Intro".to_string(),
            duration_secs: 60,
        })
        .await
        .expect("same number in another course");
}

#[tokio::test]
async fn test_duplicate_discount_code_rejected() {
    let storage = storage().await;

    storage
        .create_discount_code_impl(CreateDiscountCodeRequest {
            code: Some("SUMMER25".to_string()),
            discount_percent: Decimal::new(2500, 2),
        })
        .await
        .expect("first code");

    let duplicate = storage
        .create_discount_code_impl(CreateDiscountCodeRequest {
            code: Some("SUMMER25".to_string()),
            discount_percent: Decimal::new(1000, 2),
        })
        .await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn test_generated_discount_code() {
    let storage = storage().await;

    let code = storage
        .create_discount_code_impl(CreateDiscountCodeRequest {
            code: None,
            discount_percent: Decimal::new(1500, 2),
        })
        .await
        .expect("generated code");

    assert_eq!(code.code.len(), 8);
    assert_eq!(
        storage
            .get_discount_code_by_code_impl(&code.code)
            .await
            .expect("lookup")
            .expect("found")
            .id,
        code.id
    );
}

#[tokio::test]
async fn test_validation_bounds() {
    let storage = storage().await;
    let student = seed_student(&storage, "dmitri", 28).await;
    let course = seed_course(&storage, "Writing Lab").await;

    // 评分越界
    for score in [0, 6] {
        let result = storage
            .rate_course_impl(CreateRatingRequest {
                course_id: course.id,
                student_id: student.id,
                score,
                comment: None,
            })
            .await;
        assert!(result.is_err());
    }
    assert_eq!(Ratings::find().count(&storage.db).await.unwrap(), 0);

    // 折扣比例越界
    let result = storage
        .create_discount_code_impl(CreateDiscountCodeRequest {
            code: Some("TOOMUCH".to_string()),
            discount_percent: Decimal::new(10001, 2),
        })
        .await;
    assert!(result.is_err());
    assert_eq!(DiscountCodes::find().count(&storage.db).await.unwrap(), 0);

    // 负价格
    let result = storage
        .create_pricing_impl(CreatePricingRequest {
            course_type: "group".to_string(),
            price: Decimal::from(-10),
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_user_cascades_identity() {
    let storage = storage().await;
    let student = seed_student(&storage, "leaving_user", 31).await;
    let course = seed_course(&storage, "Exam Prep").await;

    let schedule = storage
        .create_schedule_impl(CreateScheduleRequest {
            course_id: course.id,
            time_slot: chrono::Utc::now(),
        })
        .await
        .expect("create schedule");

    storage
        .book_class_impl(BookClassRequest {
            user_id: student.user_id,
            schedule_id: schedule.id,
        })
        .await
        .expect("book class");

    assert!(
        storage
            .delete_user_impl(student.user_id)
            .await
            .expect("delete user")
    );

    let db = &storage.db;
    assert_eq!(StudentProfiles::find().count(db).await.unwrap(), 0);
    assert_eq!(ScheduledClasses::find().count(db).await.unwrap(), 0);
    // 课程与时段不受影响
    assert_eq!(Courses::find().count(db).await.unwrap(), 1);
    assert_eq!(Schedules::find().count(db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_pricing_lookup_by_course_type() {
    let storage = storage().await;

    storage
        .create_pricing_impl(CreatePricingRequest {
            course_type: "group".to_string(),
            price: Decimal::new(19900, 2),
        })
        .await
        .expect("create pricing");

    let pricing = storage
        .get_pricing_by_course_type_impl("group")
        .await
        .expect("lookup")
        .expect("found");

    assert_eq!(pricing.to_string(), "group: 199.00");
    assert!(
        storage
            .get_pricing_by_course_type_impl("unknown")
            .await
            .expect("lookup")
            .is_none()
    );
}
