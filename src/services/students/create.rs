use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::StudentService;

pub async fn create_student(
    service: &StudentService,
    req: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if student_data.first_name.trim().is_empty() || student_data.last_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "First name and last name must not be empty",
        )));
    }

    // 若指定了组，组必须存在
    if let Some(group_id) = student_data.group_id {
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

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(student, "Student created successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create student: {e}"),
            )),
        ),
    }
}
