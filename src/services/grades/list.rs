use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::grades::{requests::GradeQuery, responses::GradeListResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::GradeService;

pub async fn list_grades(
    service: &GradeService,
    req: &HttpRequest,
    query: GradeQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_grades(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeListResponse { items },
            "Grades retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list grades: {e}"),
            )),
        ),
    }
}
