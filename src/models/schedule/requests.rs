use serde::Deserialize;

use crate::models::subjects::entities::LessonType;

// 课程安排输入：create 与 update 共用，update 为全量替换
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleItemData {
    pub date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    pub group_ids: Vec<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub lesson_type: LessonType,
}

// 课程安排列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleQuery {
    pub date: Option<chrono::NaiveDate>,
    pub group_id: Option<i64>,
}
