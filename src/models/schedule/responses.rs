use serde::Serialize;

use super::entities::ScheduleItem;

// 课程安排列表响应
#[derive(Debug, Serialize)]
pub struct ScheduleListResponse {
    pub items: Vec<ScheduleItem>,
}
