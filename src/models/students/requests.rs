use serde::Deserialize;

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_born: Option<chrono::NaiveDate>,
    pub group_id: Option<i64>,
}

// 更新学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub date_born: Option<chrono::NaiveDate>,
    pub group_id: Option<i64>,
}

// 学生列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct StudentListQuery {
    pub group_id: Option<i64>,
    // 按姓名模糊搜索
    pub search: Option<String>,
}
