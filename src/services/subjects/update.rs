use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn update_subject(
    service: &SubjectService,
    req: &HttpRequest,
    subject_id: i64,
    update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Subject name must not be empty",
        )));
    }

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update subject: {e}"),
            )),
        ),
    }
}
