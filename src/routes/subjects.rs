use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::models::users::entities::UserRole;
use crate::services::SubjectService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

// HTTP处理程序
pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(&req, subject_data.into_inner())
        .await
}

pub async fn get_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(&req, subject_id.0).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&req, subject_id.0, update_data.into_inner())
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, subject_id.0).await
}

pub async fn get_deletion_info(
    req: HttpRequest,
    subject_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_deletion_info(&req, subject_id.0).await
}

// 配置路由
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 按调用者可见范围列出课程
                    .route(web::get().to(list_subjects))
                    .route(
                        web::post()
                            .to(create_subject)
                            // 仅管理员可以创建课程
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                // 级联删除前的影响报告，仅管理员可用
                web::resource("/{id}/deletion-info").route(
                    web::get()
                        .to(get_deletion_info)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_subject))
                    .route(
                        web::put()
                            .to(update_subject)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_subject)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
