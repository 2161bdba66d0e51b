pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::schedule::requests::{ScheduleItemData, ScheduleQuery};
use crate::storage::Storage;

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
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

    // 创建课程安排
    pub async fn create_schedule_item(
        &self,
        req: &HttpRequest,
        data: ScheduleItemData,
    ) -> ActixResult<HttpResponse> {
        create::create_schedule_item(self, req, data).await
    }

    // 获取课程安排
    pub async fn get_schedule_item(
        &self,
        req: &HttpRequest,
        item_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_schedule_item(self, req, item_id).await
    }

    // 列出课程安排（可按日期/组过滤）
    pub async fn list_schedule_items(
        &self,
        req: &HttpRequest,
        query: ScheduleQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_schedule_items(self, req, query).await
    }

    // 全量替换课程安排
    pub async fn update_schedule_item(
        &self,
        req: &HttpRequest,
        item_id: i64,
        data: ScheduleItemData,
    ) -> ActixResult<HttpResponse> {
        update::update_schedule_item(self, req, item_id, data).await
    }

    // 删除课程安排
    pub async fn delete_schedule_item(
        &self,
        req: &HttpRequest,
        item_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_schedule_item(self, req, item_id).await
    }
}
