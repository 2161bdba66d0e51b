use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::attendance::requests::UpdateAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

pub async fn update_attendance(
    service: &AttendanceService,
    req: &HttpRequest,
    record_id: i64,
    update_data: UpdateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.update_attendance(record_id, update_data).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            record,
            "Attendance record updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update attendance record: {e}"),
            )),
        ),
    }
}
