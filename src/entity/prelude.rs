//! 预导入模块，方便使用

pub use super::course_materials::{
    ActiveModel as CourseMaterialActiveModel, Entity as CourseMaterials,
    Model as CourseMaterialModel,
};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::discount_codes::{
    ActiveModel as DiscountCodeActiveModel, Entity as DiscountCodes, Model as DiscountCodeModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::homeworks::{
    ActiveModel as HomeworkActiveModel, Entity as Homeworks, Model as HomeworkModel,
};
pub use super::lessons::{
    ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel,
};
pub use super::pricing::{
    ActiveModel as PricingActiveModel, Entity as Pricing, Model as PricingModel,
};
pub use super::ratings::{
    ActiveModel as RatingActiveModel, Entity as Ratings, Model as RatingModel,
};
pub use super::scheduled_classes::{
    ActiveModel as ScheduledClassActiveModel, Entity as ScheduledClasses,
    Model as ScheduledClassModel,
};
pub use super::schedules::{
    ActiveModel as ScheduleActiveModel, Entity as Schedules, Model as ScheduleModel,
};
pub use super::student_profiles::{
    ActiveModel as StudentProfileActiveModel, Entity as StudentProfiles,
    Model as StudentProfileModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
