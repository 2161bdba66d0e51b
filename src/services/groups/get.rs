use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn get_group(
    service: &GroupService,
    req: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.get_group_by_id(group_id).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            group,
            "Group retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get group: {e}"),
            )),
        ),
    }
}
