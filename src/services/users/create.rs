use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;

use super::UserService;

pub async fn create_user(
    service: &UserService,
    req: &HttpRequest,
    mut user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if user_data.username.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Username must not be empty",
        )));
    }
    if user_data.password.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Password must not be empty",
        )));
    }

    // 用户名唯一性检查
    match storage.get_user_by_username(&user_data.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Username is already taken",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check username: {e}"),
                )),
            );
        }
    }

    // 存入哈希后的密码
    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to hash password: {e}"),
                )),
            );
        }
    };

    match storage.create_user(user_data).await {
        Ok(user) => {
            tracing::info!("User {} created", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "User created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create user: {e}"),
            )),
        ),
    }
}
