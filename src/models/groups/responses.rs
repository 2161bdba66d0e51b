use serde::Serialize;

use super::entities::Group;

// 组列表响应
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub items: Vec<Group>,
}

// 组删除影响报告
//
// 只读预估：列出随组一起被级联删除的行数。
// can_delete 恒为 true —— 报告仅用于前端确认提示，不拦截删除。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDeletionInfo {
    pub group_id: i64,
    pub group_name: String,
    pub schedule_items_count: i64,
    pub students_count: i64,
    pub discipline_groups_count: i64,
    pub can_delete: bool,
}
