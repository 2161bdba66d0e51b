pub mod create;
pub mod delete;
pub mod deletion_info;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::groups::requests::{CreateGroupRequest, UpdateGroupRequest};
use crate::storage::Storage;

pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
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

    // 创建组
    pub async fn create_group(
        &self,
        req: &HttpRequest,
        group_data: CreateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, req, group_data).await
    }

    // 获取组信息
    pub async fn get_group(&self, req: &HttpRequest, group_id: i64) -> ActixResult<HttpResponse> {
        get::get_group(self, req, group_id).await
    }

    // 按调用者可见范围列出组
    pub async fn list_groups(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_groups(self, req).await
    }

    // 更新组信息
    pub async fn update_group(
        &self,
        req: &HttpRequest,
        group_id: i64,
        update_data: UpdateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_group(self, req, group_id, update_data).await
    }

    // 级联删除组
    pub async fn delete_group(&self, req: &HttpRequest, group_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_group(self, req, group_id).await
    }

    // 删除影响报告
    pub async fn get_deletion_info(
        &self,
        req: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        deletion_info::get_deletion_info(self, req, group_id).await
    }
}
