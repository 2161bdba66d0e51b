use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::schedule::{requests::ScheduleQuery, responses::ScheduleListResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::ScheduleService;

pub async fn list_schedule_items(
    service: &ScheduleService,
    req: &HttpRequest,
    query: ScheduleQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_schedule_items(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScheduleListResponse { items },
            "Schedule items retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list schedule items: {e}"),
            )),
        ),
    }
}
