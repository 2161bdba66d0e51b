use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

/// 级联删除课程：其全部课程安排（整条）与课程-组分配随课程消失。
/// 级联在存储层的单事务内完成，任一步失败整体回滚。
pub async fn delete_subject(
    service: &SubjectService,
    req: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_subject_with_relations(subject_id).await {
        Ok(true) => {
            tracing::info!("Subject {} deleted with all relations", subject_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to delete subject {}: {}", subject_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubjectDeleteFailed,
                    format!("Failed to delete subject: {e}"),
                )),
            )
        }
    }
}
