//! SQL 工具函数

/// 转义 LIKE 模式中的通配符
///
/// 用户输入的搜索词直接拼入 LIKE 时，`%`、`_` 和 `\` 会被当作通配符。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent_and_underscore() {
        assert_eq!(escape_like_pattern("100%_done"), "100\\%\\_done");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("a\\b%"), "a\\\\b\\%");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("IELTS Prep"), "IELTS Prep");
    }
}
