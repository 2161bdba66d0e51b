use serde::Serialize;

use super::entities::User;

// 用户列表响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
}
