use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::attendance::{requests::AttendanceQuery, responses::AttendanceListResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

pub async fn list_attendance(
    service: &AttendanceService,
    req: &HttpRequest,
    query: AttendanceQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_attendance(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceListResponse { items },
            "Attendance records retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list attendance records: {e}"),
            )),
        ),
    }
}
