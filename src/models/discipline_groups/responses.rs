use serde::Serialize;

use super::entities::DisciplineGroup;

// 分配列表响应
#[derive(Debug, Serialize)]
pub struct DisciplineGroupListResponse {
    pub items: Vec<DisciplineGroup>,
}
