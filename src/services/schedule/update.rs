use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::schedule::requests::ScheduleItemData;
use crate::models::{ApiResponse, ErrorCode};

use super::ScheduleService;
use super::create::{input_error_response, validate_schedule_input};

/// 全量替换：输入校验与创建完全一致，ID 保留，组关联行重建
pub async fn update_schedule_item(
    service: &ScheduleService,
    req: &HttpRequest,
    item_id: i64,
    data: ScheduleItemData,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if let Err(err) = validate_schedule_input(storage.as_ref(), &data).await {
        return Ok(input_error_response(err));
    }

    match storage.update_schedule_item(item_id, &data).await {
        Ok(Some(item)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            item,
            "Schedule item updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleItemNotFound,
            "Schedule item not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update schedule item: {e}"),
            )),
        ),
    }
}
