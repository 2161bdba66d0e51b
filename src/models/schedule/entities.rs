use serde::{Deserialize, Serialize};

use crate::models::subjects::entities::LessonType;

// 课程安排条目：一次授课，引用一个或多个组、一门课程与一名教师
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleItem {
    pub id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    // 参与的组（至少一个）
    pub group_ids: Vec<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub lesson_type: LessonType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
