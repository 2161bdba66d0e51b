use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ScheduleService;

pub async fn get_schedule_item(
    service: &ScheduleService,
    req: &HttpRequest,
    item_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.get_schedule_item_by_id(item_id).await {
        Ok(Some(item)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            item,
            "Schedule item retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleItemNotFound,
            "Schedule item not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get schedule item: {e}"),
            )),
        ),
    }
}
