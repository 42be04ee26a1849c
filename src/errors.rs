//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EnglishSchoolError {
            $($variant(String),)*
        }

        impl EnglishSchoolError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EnglishSchoolError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EnglishSchoolError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EnglishSchoolError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EnglishSchoolError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EnglishSchoolError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
}

impl EnglishSchoolError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EnglishSchoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EnglishSchoolError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EnglishSchoolError {
    fn from(err: sea_orm::DbErr) -> Self {
        EnglishSchoolError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EnglishSchoolError {
    fn from(err: std::io::Error) -> Self {
        EnglishSchoolError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EnglishSchoolError {
    fn from(err: serde_json::Error) -> Self {
        EnglishSchoolError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EnglishSchoolError {
    fn from(err: chrono::ParseError) -> Self {
        EnglishSchoolError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EnglishSchoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EnglishSchoolError::database_config("test").code(), "E001");
        assert_eq!(EnglishSchoolError::validation("test").code(), "E005");
        assert_eq!(EnglishSchoolError::not_found("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EnglishSchoolError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            EnglishSchoolError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EnglishSchoolError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = EnglishSchoolError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
