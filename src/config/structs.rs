use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub upload: UploadConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 上传配置
///
/// 课程图片、课程资料和作业文件都存放在 dir 下的各自前缀目录中，
/// 数据库记录只保存相对路径。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub dir: String,                // 上传目录
    pub max_size: usize,            // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的扩展名
}
