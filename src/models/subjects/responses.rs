use serde::Serialize;

use super::entities::Subject;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
}

// 课程删除影响报告
//
// 只读预估：列出随课程一起被级联删除的行数。
// can_delete 恒为 true —— 报告仅用于前端确认提示，不拦截删除。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDeletionInfo {
    pub subject_id: i64,
    pub subject_name: String,
    pub schedule_items_count: i64,
    pub discipline_groups_count: i64,
    pub can_delete: bool,
}
