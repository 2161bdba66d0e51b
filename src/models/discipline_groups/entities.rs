use serde::{Deserialize, Serialize};

// 课程-组分配：一门课程与一个组按学期/学年绑定，可选授课教师
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisciplineGroup {
    pub id: i64,
    pub subject_id: i64,
    pub group_id: i64,
    pub teacher_id: Option<i64>,
    // 学期 (1, 2, 3, ...)
    pub semester: i32,
    // 学年 (2025, 2026)
    pub year: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
