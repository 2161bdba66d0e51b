use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::groups::requests::UpdateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn update_group(
    service: &GroupService,
    req: &HttpRequest,
    group_id: i64,
    update_data: UpdateGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if let Some(ref name) = update_data.name {
        if name.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Group name must not be empty",
            )));
        }
        // 新名称不能与其他组冲突
        if let Ok(Some(existing)) = storage.get_group_by_name(name).await
            && existing.id != group_id
        {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::GroupAlreadyExists,
                "Group with this name already exists",
            )));
        }
    }

    match storage.update_group(group_id, update_data).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            group,
            "Group updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update group: {e}"),
            )),
        ),
    }
}
