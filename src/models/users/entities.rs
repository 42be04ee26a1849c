use serde::{Deserialize, Serialize};

// 用户实体
//
// 账号的认证信息（密码、邮箱、角色）由外部身份服务持有，
// 这里只承载外键锚点和展示用的用户名。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
