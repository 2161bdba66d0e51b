use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::UserService;

pub async fn list_users(service: &UserService, req: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            users,
            "Users retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list users: {e}"),
            )),
        ),
    }
}
