//! 媒体文件路径构造
//!
//! 二进制资产（课程图片、课程资料、作业文件）保存在上传目录下的
//! 实体前缀子目录中，数据库记录只保存这里生成的相对路径。

use std::path::Path;
use uuid::Uuid;

pub const COURSE_IMAGE_PREFIX: &str = "course_images";
pub const COURSE_MATERIAL_PREFIX: &str = "course_materials";
pub const HOMEWORK_PREFIX: &str = "homework";

/// 生成存储用相对路径：`<prefix>/<epoch>-<uuid><ext>`
///
/// 保留原始扩展名（小写），文件名本身不进入路径，避免路径注入。
pub fn stored_file_path(prefix: &str, original_name: &str) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    format!(
        "{prefix}/{}-{}{extension}",
        chrono::Utc::now().timestamp(),
        Uuid::new_v4()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_prefix_and_extension() {
        let path = stored_file_path(COURSE_MATERIAL_PREFIX, "Unit 3 Workbook.PDF");
        assert!(path.starts_with("course_materials/"));
        assert!(path.ends_with(".pdf"));
    }

    #[test]
    fn test_original_name_not_embedded() {
        let path = stored_file_path(HOMEWORK_PREFIX, "../../etc/passwd");
        assert!(path.starts_with("homework/"));
        assert!(!path.contains(".."));
    }

    #[test]
    fn test_no_extension() {
        let path = stored_file_path(COURSE_IMAGE_PREFIX, "cover");
        assert!(path.starts_with("course_images/"));
        assert!(!path.contains('.'));
    }

    #[test]
    fn test_unique_per_call() {
        let a = stored_file_path(HOMEWORK_PREFIX, "essay.docx");
        let b = stored_file_path(HOMEWORK_PREFIX, "essay.docx");
        assert_ne!(a, b);
    }
}
