use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

pub async fn delete_attendance(
    service: &AttendanceService,
    req: &HttpRequest,
    record_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_attendance(record_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Attendance record deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete attendance record: {e}"),
            )),
        ),
    }
}
