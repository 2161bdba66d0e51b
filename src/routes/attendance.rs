use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceQuery, CreateAttendanceRequest, UpdateAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn list_attendance(
    req: HttpRequest,
    query: web::Query<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(&req, query.into_inner())
        .await
}

pub async fn create_attendance(
    req: HttpRequest,
    record_data: web::Json<CreateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .create_attendance(&req, record_data.into_inner())
        .await
}

pub async fn get_attendance(req: HttpRequest, record_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_attendance(&req, record_id.0).await
}

pub async fn update_attendance(
    req: HttpRequest,
    record_id: SafeIDI64,
    update_data: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(&req, record_id.0, update_data.into_inner())
        .await
}

pub async fn delete_attendance(
    req: HttpRequest,
    record_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.delete_attendance(&req, record_id.0).await
}

pub async fn get_student_statistics(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .get_student_statistics(&req, student_id.0)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_attendance))
                    .route(
                        web::post()
                            .to(create_attendance)
                            // 仅教师和管理员可以登记出勤
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/statistics/student/{id}")
                    .route(web::get().to(get_student_statistics)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_attendance))
                    .route(
                        web::put()
                            .to(update_attendance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_attendance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
