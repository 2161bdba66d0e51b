use serde::Serialize;

use super::entities::Grade;

// 成绩列表响应
#[derive(Debug, Serialize)]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
}

// 学生成绩统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeStatistics {
    pub student_id: i64,
    pub total_grades: i64,
    // 无成绩时为 None
    pub average_grade: Option<f64>,
}
