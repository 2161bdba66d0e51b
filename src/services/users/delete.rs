use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

use super::UserService;

pub async fn delete_user(
    service: &UserService,
    req: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 不允许删除自己
    if RequireJWT::extract_user_id(req) == Some(user_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "You cannot delete your own account",
        )));
    }

    match storage.delete_user(user_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_empty("User deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete user: {e}"),
            )),
        ),
    }
}
