//! 随机码生成

use rand::Rng;

// 去掉易混淆字符 0/O/1/I
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const DEFAULT_DISCOUNT_CODE_LEN: usize = 8;

/// 生成折扣码
pub fn generate_discount_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        assert_eq!(generate_discount_code(8).len(), 8);
        assert_eq!(generate_discount_code(12).len(), 12);
    }

    #[test]
    fn test_code_charset() {
        let code = generate_discount_code(64);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }
}
