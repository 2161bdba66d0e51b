pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::discipline_groups::requests::{
    CreateDisciplineGroupRequest, DisciplineGroupQuery, UpdateDisciplineGroupRequest,
};
use crate::storage::Storage;

pub struct DisciplineGroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl DisciplineGroupService {
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

    // 创建课程-组分配
    pub async fn create_assignment(
        &self,
        req: &HttpRequest,
        assignment_data: CreateDisciplineGroupRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, req, assignment_data).await
    }

    // 获取分配信息
    pub async fn get_assignment(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, req, assignment_id).await
    }

    // 列出分配（可按组/课程/教师过滤）
    pub async fn list_assignments(
        &self,
        req: &HttpRequest,
        query: DisciplineGroupQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, req, query).await
    }

    // 更新分配
    pub async fn update_assignment(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
        update_data: UpdateDisciplineGroupRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, req, assignment_id, update_data).await
    }

    // 删除分配
    pub async fn delete_assignment(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, req, assignment_id).await
    }
}
