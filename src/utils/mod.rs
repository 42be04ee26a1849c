pub mod media;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use media::{COURSE_IMAGE_PREFIX, COURSE_MATERIAL_PREFIX, HOMEWORK_PREFIX, stored_file_path};
pub use random_code::generate_discount_code;
pub use sql::escape_like_pattern;
