use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn create_subject(
    service: &SubjectService,
    req: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if subject_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Subject name must not be empty",
        )));
    }
    if subject_data.short_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Subject short name must not be empty",
        )));
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            tracing::info!("Subject {} created", subject.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create subject: {e}"),
            )),
        ),
    }
}
