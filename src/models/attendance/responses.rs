use serde::Serialize;

use super::entities::Attendance;

// 出勤列表响应
#[derive(Debug, Serialize)]
pub struct AttendanceListResponse {
    pub items: Vec<Attendance>,
}

// 学生出勤统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceStatistics {
    pub student_id: i64,
    pub total_classes: i64,
    pub present_classes: i64,
    // 无记录时为 0.0
    pub attendance_percentage: f64,
}
