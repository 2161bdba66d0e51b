use serde::Deserialize;

use super::entities::GradeType;
use crate::models::subjects::entities::LessonType;

// 创建成绩请求，date 省略时取当天
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: Option<i64>,
    pub grade_type: GradeType,
    pub lesson_type: Option<LessonType>,
    pub value: i32,
    pub date: Option<chrono::NaiveDate>,
    pub comment: Option<String>,
}

// 更新成绩请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGradeRequest {
    pub grade_type: Option<GradeType>,
    pub lesson_type: Option<LessonType>,
    pub value: Option<i32>,
    pub date: Option<chrono::NaiveDate>,
    pub comment: Option<String>,
}

// 成绩列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct GradeQuery {
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
}
