use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::{CreateGradeRequest, GradeQuery, UpdateGradeRequest};
use crate::models::users::entities::UserRole;
use crate::services::GradeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeQuery>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req, query.into_inner()).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.create_grade(&req, grade_data.into_inner()).await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(&req, grade_id.0).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(&req, grade_id.0, update_data.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&req, grade_id.0).await
}

pub async fn get_student_statistics(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_student_statistics(&req, student_id.0).await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_grades))
                    .route(
                        web::post()
                            .to(create_grade)
                            // 仅教师和管理员可以录入成绩
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/statistics/student/{id}")
                    .route(web::get().to(get_student_statistics)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_grade))
                    .route(
                        web::put()
                            .to(update_grade)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_grade)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
