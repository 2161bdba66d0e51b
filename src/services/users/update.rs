use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;

use super::UserService;

pub async fn update_user(
    service: &UserService,
    req: &HttpRequest,
    user_id: i64,
    mut update_data: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 新密码同样以哈希形式存储
    if let Some(ref password) = update_data.password {
        if password.is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Password must not be empty",
            )));
        }
        update_data.password = match hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to hash password: {e}"),
                    )),
                );
            }
        };
    }

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            user,
            "User updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update user: {e}"),
            )),
        ),
    }
}
