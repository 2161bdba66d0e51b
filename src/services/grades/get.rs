use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::GradeService;

pub async fn get_grade(
    service: &GradeService,
    req: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.get_grade_by_id(grade_id).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(grade, "Grade retrieved successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get grade: {e}"),
            )),
        ),
    }
}
