use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

/// 级联删除组：课程安排（整条）、课程-组分配、学生及其成绩/出勤都随组消失。
/// 级联在存储层的单事务内完成，任一步失败整体回滚。
pub async fn delete_group(
    service: &GroupService,
    req: &HttpRequest,
    group_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_group_with_relations(group_id).await {
        Ok(true) => {
            tracing::info!("Group {} deleted with all relations", group_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Group deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to delete group {}: {}", group_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GroupDeleteFailed,
                    format!("Failed to delete group: {e}"),
                )),
            )
        }
    }
}
