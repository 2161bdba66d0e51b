use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::schedule::requests::{ScheduleItemData, ScheduleQuery};
use crate::models::users::entities::UserRole;
use crate::services::ScheduleService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ScheduleService 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

// HTTP处理程序
pub async fn list_schedule_items(
    req: HttpRequest,
    query: web::Query<ScheduleQuery>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_schedule_items(&req, query.into_inner())
        .await
}

pub async fn create_schedule_item(
    req: HttpRequest,
    data: web::Json<ScheduleItemData>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule_item(&req, data.into_inner())
        .await
}

pub async fn get_schedule_item(req: HttpRequest, item_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.get_schedule_item(&req, item_id.0).await
}

pub async fn update_schedule_item(
    req: HttpRequest,
    item_id: SafeIDI64,
    data: web::Json<ScheduleItemData>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .update_schedule_item(&req, item_id.0, data.into_inner())
        .await
}

pub async fn delete_schedule_item(
    req: HttpRequest,
    item_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.delete_schedule_item(&req, item_id.0).await
}

// 配置路由
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schedule")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_schedule_items))
                    .route(
                        web::post()
                            .to(create_schedule_item)
                            // 教师与管理员可以创建课程安排
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_schedule_item))
                    .route(
                        web::put()
                            .to(update_schedule_item)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_schedule_item)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
