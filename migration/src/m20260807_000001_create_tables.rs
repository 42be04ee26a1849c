use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表（身份服务的锚点，仅保留外键与展示所需字段）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生档案表
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::Age).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::Subject)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        // teacher_id 删除时置空：删除教师账号不应连带销毁课程及其报名数据
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(
                        ColumnDef::new(Courses::CourseType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::LessonsCount).integer().not_null())
                    .col(ColumnDef::new(Courses::Materials).text().not_null())
                    .col(ColumnDef::new(Courses::Image).string().null())
                    .col(ColumnDef::new(Courses::TeacherId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课时表
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lessons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lessons::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Lessons::LessonNumber).integer().not_null())
                    .col(ColumnDef::new(Lessons::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Lessons::DurationSecs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Lessons::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lessons::Table, Lessons::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程资料表
        manager
            .create_table(
                Table::create()
                    .table(CourseMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseMaterials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseMaterials::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseMaterials::MaterialFile)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseMaterials::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseMaterials::Table, CourseMaterials::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建报名表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::DateEnrolled)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::ExpiryDate).date().null())
                    .col(
                        ColumnDef::new(Enrollments::PaymentConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建时段表
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Schedules::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schedules::TimeSlot)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schedules::Available)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedules::Table, Schedules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建约课表
        // user_id 直接引用 users：允许尚未建立学生档案的用户预约试听
        manager
            .create_table(
                Table::create()
                    .table(ScheduledClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduledClasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScheduledClasses::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduledClasses::ScheduleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduledClasses::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduledClasses::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduledClasses::Table, ScheduledClasses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduledClasses::Table, ScheduledClasses::ScheduleId)
                            .to(Schedules::Table, Schedules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建折扣码表
        manager
            .create_table(
                Table::create()
                    .table(DiscountCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DiscountCodes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DiscountCodes::Code)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(DiscountCodes::DiscountPercent)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建定价表
        manager
            .create_table(
                Table::create()
                    .table(Pricing::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pricing::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Pricing::CourseType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pricing::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Homeworks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Homeworks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Homeworks::File).string().not_null())
                    .col(
                        ColumnDef::new(Homeworks::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Homeworks::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Homeworks::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Homeworks::Table, Homeworks::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Homeworks::Table, Homeworks::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评价表
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ratings::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Ratings::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Ratings::Score).integer().not_null())
                    .col(ColumnDef::new(Ratings::Comment).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::StudentId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 课时表：同一课程内课时序号唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lessons_course_id_lesson_number")
                    .table(Lessons::Table)
                    .col(Lessons::CourseId)
                    .col(Lessons::LessonNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 课程表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_teacher_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_course_type")
                    .table(Courses::Table)
                    .col(Courses::CourseType)
                    .to_owned(),
            )
            .await?;

        // 报名表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_student_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_course_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::CourseId)
                    .to_owned(),
            )
            .await?;

        // 时段表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedules_course_id")
                    .table(Schedules::Table)
                    .col(Schedules::CourseId)
                    .to_owned(),
            )
            .await?;

        // 约课表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scheduled_classes_user_id")
                    .table(ScheduledClasses::Table)
                    .col(ScheduledClasses::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scheduled_classes_schedule_id")
                    .table(ScheduledClasses::Table)
                    .col(ScheduledClasses::ScheduleId)
                    .to_owned(),
            )
            .await?;

        // 定价表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pricing_course_type")
                    .table(Pricing::Table)
                    .col(Pricing::CourseType)
                    .to_owned(),
            )
            .await?;

        // 作业表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_homeworks_student_id")
                    .table(Homeworks::Table)
                    .col(Homeworks::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_homeworks_course_id")
                    .table(Homeworks::Table)
                    .col(Homeworks::CourseId)
                    .to_owned(),
            )
            .await?;

        // 评价表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ratings_course_id")
                    .table(Ratings::Table)
                    .col(Ratings::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ratings_student_id")
                    .table(Ratings::Table)
                    .col(Ratings::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Homeworks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pricing::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DiscountCodes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScheduledClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseMaterials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    #[sea_orm(iden = "student_profiles")]
    Table,
    Id,
    UserId,
    Age,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    UserId,
    Subject,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Title,
    Description,
    CourseType,
    LessonsCount,
    Materials,
    Image,
    TeacherId,
}

#[derive(DeriveIden)]
enum Lessons {
    #[sea_orm(iden = "lessons")]
    Table,
    Id,
    CourseId,
    LessonNumber,
    Title,
    DurationSecs,
    Completed,
}

#[derive(DeriveIden)]
enum CourseMaterials {
    #[sea_orm(iden = "course_materials")]
    Table,
    Id,
    CourseId,
    MaterialFile,
    Description,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    StudentId,
    CourseId,
    DateEnrolled,
    ExpiryDate,
    PaymentConfirmed,
}

#[derive(DeriveIden)]
enum Schedules {
    #[sea_orm(iden = "schedules")]
    Table,
    Id,
    CourseId,
    TimeSlot,
    Available,
}

#[derive(DeriveIden)]
enum ScheduledClasses {
    #[sea_orm(iden = "scheduled_classes")]
    Table,
    Id,
    UserId,
    ScheduleId,
    EnrolledAt,
    Completed,
}

#[derive(DeriveIden)]
enum DiscountCodes {
    #[sea_orm(iden = "discount_codes")]
    Table,
    Id,
    Code,
    DiscountPercent,
}

#[derive(DeriveIden)]
enum Pricing {
    #[sea_orm(iden = "pricing")]
    Table,
    Id,
    CourseType,
    Price,
}

#[derive(DeriveIden)]
enum Homeworks {
    #[sea_orm(iden = "homeworks")]
    Table,
    Id,
    File,
    StudentId,
    CourseId,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Ratings {
    #[sea_orm(iden = "ratings")]
    Table,
    Id,
    CourseId,
    StudentId,
    Score,
    Comment,
}
