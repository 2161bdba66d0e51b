use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::discipline_groups::requests::UpdateDisciplineGroupRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::DisciplineGroupService;

pub async fn update_assignment(
    service: &DisciplineGroupService,
    req: &HttpRequest,
    assignment_id: i64,
    update_data: UpdateDisciplineGroupRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 新教师（若指定）必须存在
    if let Some(teacher_id) = update_data.teacher_id {
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

    match storage
        .update_discipline_group(assignment_id, update_data)
        .await
    {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DisciplineGroupNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update assignment: {e}"),
            )),
        ),
    }
}
