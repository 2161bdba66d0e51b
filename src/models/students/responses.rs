use serde::Serialize;

use super::entities::Student;

// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
}
