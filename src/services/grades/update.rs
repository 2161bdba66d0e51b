use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::grades::requests::UpdateGradeRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::GradeService;

pub async fn update_grade(
    service: &GradeService,
    req: &HttpRequest,
    grade_id: i64,
    update_data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 新分值（若指定）同样限定在 1..=10
    if let Some(value) = update_data.value
        && !(1..=10).contains(&value)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Grade value must be between 1 and 10",
        )));
    }

    match storage.update_grade(grade_id, update_data).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(grade, "Grade updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update grade: {e}"),
            )),
        ),
    }
}
