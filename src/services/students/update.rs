use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::StudentService;

pub async fn update_student(
    service: &StudentService,
    req: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 若变更了所属组，组必须存在
    if let Some(group_id) = update_data.group_id {
        match storage.group_exists(group_id).await {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::GroupNotFound,
                    format!("Group not found: {group_id}"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check group: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update student: {e}"),
            )),
        ),
    }
}
