use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::discipline_groups::requests::CreateDisciplineGroupRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::DisciplineGroupService;

pub async fn create_assignment(
    service: &DisciplineGroupService,
    req: &HttpRequest,
    assignment_data: CreateDisciplineGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 课程与组必须存在，教师（若指定）必须存在
    match storage.subject_exists(assignment_data.subject_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("Subject not found: {}", assignment_data.subject_id),
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
    match storage.group_exists(assignment_data.group_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                format!("Group not found: {}", assignment_data.group_id),
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
    if let Some(teacher_id) = assignment_data.teacher_id {
        match storage.get_user_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    format!("Teacher not found: {teacher_id}"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to check teacher: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_discipline_group(assignment_data).await {
        Ok(assignment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            assignment,
            "Assignment created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create assignment: {e}"),
            )),
        ),
    }
}
