use serde::Deserialize;

use super::entities::LessonType;

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub short_name: String,
    pub description: Option<String>,
    pub credits: Option<i32>,
    #[serde(default)]
    pub lesson_types: Vec<LessonType>,
}

// 更新课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub lesson_types: Option<Vec<LessonType>>,
}
