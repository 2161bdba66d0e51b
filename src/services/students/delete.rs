use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::StudentService;

/// 删除学生及其成绩/出勤记录（存储层单事务）
pub async fn delete_student(
    service: &StudentService,
    req: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_student(student_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_empty("Student deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete student: {e}"),
            )),
        ),
    }
}
