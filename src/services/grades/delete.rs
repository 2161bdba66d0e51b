use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::GradeService;

pub async fn delete_grade(
    service: &GradeService,
    req: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_grade(grade_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_empty("Grade deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete grade: {e}"),
            )),
        ),
    }
}
