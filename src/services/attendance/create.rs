use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::attendance::requests::CreateAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::AttendanceService;

pub async fn create_attendance(
    service: &AttendanceService,
    req: &HttpRequest,
    record_data: CreateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 学生与课程必须存在
    match storage.get_student_by_id(record_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student not found: {}", record_data.student_id),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check student: {e}"),
                )),
            );
        }
    }
    match storage.subject_exists(record_data.subject_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("Subject not found: {}", record_data.subject_id),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check subject: {e}"),
                )),
            );
        }
    }

    match storage.create_attendance(record_data).await {
        Ok(record) => {
            tracing::info!(
                "Attendance {} recorded for student {}",
                record.id,
                record.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                record,
                "Attendance recorded successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to record attendance: {e}"),
            )),
        ),
    }
}
