//! 数据模型定义
//!
//! 业务实体、请求与响应结构，与 entity 模块中的数据库实体分离。

pub mod common;

pub mod attendance;
pub mod auth;
pub mod discipline_groups;
pub mod grades;
pub mod groups;
pub mod schedule;
pub mod students;
pub mod subjects;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
