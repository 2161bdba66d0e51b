use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::groups::requests::CreateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn create_group(
    service: &GroupService,
    req: &HttpRequest,
    group_data: CreateGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if group_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Group name must not be empty",
        )));
    }

    // 名称唯一性检查
    match storage.get_group_by_name(&group_data.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::GroupAlreadyExists,
                "Group with this name already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check group name: {e}"),
                )),
            );
        }
    }

    match storage.create_group(group_data).await {
        Ok(group) => {
            tracing::info!("Group {} created", group.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(group, "Group created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create group: {e}"),
            )),
        ),
    }
}
