pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod statistics;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{CreateGradeRequest, GradeQuery, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 记录成绩
    pub async fn create_grade(
        &self,
        req: &HttpRequest,
        grade_data: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, req, grade_data).await
    }

    // 获取成绩信息
    pub async fn get_grade(&self, req: &HttpRequest, grade_id: i64) -> ActixResult<HttpResponse> {
        get::get_grade(self, req, grade_id).await
    }

    // 列出成绩（可按学生/课程过滤）
    pub async fn list_grades(
        &self,
        req: &HttpRequest,
        query: GradeQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, req, query).await
    }

    // 更新成绩
    pub async fn update_grade(
        &self,
        req: &HttpRequest,
        grade_id: i64,
        update_data: UpdateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, req, grade_id, update_data).await
    }

    // 删除成绩
    pub async fn delete_grade(
        &self,
        req: &HttpRequest,
        grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, req, grade_id).await
    }

    // 某学生的成绩统计
    pub async fn get_student_statistics(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        statistics::get_student_statistics(self, req, student_id).await
    }
}
