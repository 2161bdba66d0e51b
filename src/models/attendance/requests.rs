use serde::Deserialize;

use super::entities::AttendanceStatus;

// 创建出勤记录请求，date 省略时取当天
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendanceRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub status: AttendanceStatus,
    pub date: Option<chrono::NaiveDate>,
}

// 更新出勤记录请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub status: Option<AttendanceStatus>,
    pub date: Option<chrono::NaiveDate>,
}

// 出勤列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceQuery {
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
}
