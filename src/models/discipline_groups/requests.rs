use serde::Deserialize;

// 创建课程-组分配请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDisciplineGroupRequest {
    pub subject_id: i64,
    pub group_id: i64,
    pub teacher_id: Option<i64>,
    pub semester: i32,
    pub year: i32,
}

// 更新课程-组分配请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDisciplineGroupRequest {
    pub teacher_id: Option<i64>,
    pub semester: Option<i32>,
    pub year: Option<i32>,
}

// 分配列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct DisciplineGroupQuery {
    pub group_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
}
