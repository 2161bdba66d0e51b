use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::discipline_groups::requests::{
    CreateDisciplineGroupRequest, DisciplineGroupQuery, UpdateDisciplineGroupRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::DisciplineGroupService;
use crate::utils::SafeIDI64;

// 懒加载的全局 DisciplineGroupService 实例
static DISCIPLINE_GROUP_SERVICE: Lazy<DisciplineGroupService> =
    Lazy::new(DisciplineGroupService::new_lazy);

// HTTP处理程序
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<DisciplineGroupQuery>,
) -> ActixResult<HttpResponse> {
    DISCIPLINE_GROUP_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateDisciplineGroupRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINE_GROUP_SERVICE
        .create_assignment(&req, assignment_data.into_inner())
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DISCIPLINE_GROUP_SERVICE
        .get_assignment(&req, assignment_id.0)
        .await
}

pub async fn update_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    update_data: web::Json<UpdateDisciplineGroupRequest>,
) -> ActixResult<HttpResponse> {
    DISCIPLINE_GROUP_SERVICE
        .update_assignment(&req, assignment_id.0, update_data.into_inner())
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DISCIPLINE_GROUP_SERVICE
        .delete_assignment(&req, assignment_id.0)
        .await
}

// 配置路由
pub fn configure_discipline_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/discipline-groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(
                        web::post()
                            .to(create_assignment)
                            // 仅管理员可以分配课程给组
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_assignment))
                    .route(
                        web::put()
                            .to(update_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
