use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

pub async fn get_attendance(
    service: &AttendanceService,
    req: &HttpRequest,
    record_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.get_attendance_by_id(record_id).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            record,
            "Attendance record retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get attendance record: {e}"),
            )),
        ),
    }
}
