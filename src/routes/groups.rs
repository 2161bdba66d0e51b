use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::groups::requests::{CreateGroupRequest, UpdateGroupRequest};
use crate::models::users::entities::UserRole;
use crate::services::GroupService;
use crate::utils::SafeIDI64;

// 懒加载的全局 GroupService 实例
static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

// HTTP处理程序
pub async fn list_groups(req: HttpRequest) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(&req).await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.create_group(&req, group_data.into_inner()).await
}

pub async fn get_group(req: HttpRequest, group_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.get_group(&req, group_id.0).await
}

pub async fn update_group(
    req: HttpRequest,
    group_id: SafeIDI64,
    update_data: web::Json<UpdateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .update_group(&req, group_id.0, update_data.into_inner())
        .await
}

pub async fn delete_group(req: HttpRequest, group_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.delete_group(&req, group_id.0).await
}

pub async fn get_deletion_info(
    req: HttpRequest,
    group_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.get_deletion_info(&req, group_id.0).await
}

// 配置路由
pub fn configure_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 按调用者可见范围列出组
                    .route(web::get().to(list_groups))
                    .route(
                        web::post()
                            .to(create_group)
                            // 仅管理员可以创建组
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
                    .route(web::get().to(get_group))
                    .route(
                        web::put()
                            .to(update_group)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_group)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
