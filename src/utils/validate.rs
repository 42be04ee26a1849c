use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

/// 评分范围：1 - 5 星
pub const MIN_RATING_SCORE: i32 = 1;
pub const MAX_RATING_SCORE: i32 = 5;

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_rating_score(score: i32) -> Result<(), &'static str> {
    if !(MIN_RATING_SCORE..=MAX_RATING_SCORE).contains(&score) {
        return Err("Rating score must be between 1 and 5");
    }
    Ok(())
}

pub fn validate_discount_percent(percent: Decimal) -> Result<(), &'static str> {
    if percent < Decimal::ZERO || percent > Decimal::from(100) {
        return Err("Discount percent must be between 0 and 100");
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price must not be negative");
    }
    Ok(())
}

pub fn validate_lesson_duration(duration_secs: i64) -> Result<(), &'static str> {
    if duration_secs <= 0 {
        return Err("Lesson duration must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("ana").is_ok());
        assert!(validate_username("student_2024").is_ok());
        assert!(validate_username("mary-jane").is_ok());
    }

    #[test]
    fn test_invalid_username() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("почта").is_err());
    }

    #[test]
    fn test_rating_score_bounds() {
        assert!(validate_rating_score(1).is_ok());
        assert!(validate_rating_score(5).is_ok());
        assert!(validate_rating_score(0).is_err());
        assert!(validate_rating_score(6).is_err());
    }

    #[test]
    fn test_discount_percent_bounds() {
        assert!(validate_discount_percent(Decimal::new(1550, 2)).is_ok()); // 15.50
        assert!(validate_discount_percent(Decimal::from(100)).is_ok());
        assert!(validate_discount_percent(Decimal::from(-1)).is_err());
        assert!(validate_discount_percent(Decimal::new(10001, 2)).is_err()); // 100.01
    }

    #[test]
    fn test_lesson_duration() {
        assert!(validate_lesson_duration(45 * 60).is_ok());
        assert!(validate_lesson_duration(0).is_err());
        assert!(validate_lesson_duration(-60).is_err());
    }
}
