use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::{requests::StudentListQuery, responses::StudentListResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::StudentService;

pub async fn list_students(
    service: &StudentService,
    req: &HttpRequest,
    query: StudentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_students(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentListResponse { items },
            "Students retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list students: {e}"),
            )),
        ),
    }
}
