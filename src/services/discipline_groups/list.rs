use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::discipline_groups::{
    requests::DisciplineGroupQuery, responses::DisciplineGroupListResponse,
};
use crate::models::{ApiResponse, ErrorCode};

use super::DisciplineGroupService;

pub async fn list_assignments(
    service: &DisciplineGroupService,
    req: &HttpRequest,
    query: DisciplineGroupQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_discipline_groups(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DisciplineGroupListResponse { items },
            "Assignments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list assignments: {e}"),
            )),
        ),
    }
}
