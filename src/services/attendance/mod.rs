pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod statistics;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceQuery, CreateAttendanceRequest, UpdateAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 记录出勤
    pub async fn create_attendance(
        &self,
        req: &HttpRequest,
        record_data: CreateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance(self, req, record_data).await
    }

    // 获取出勤记录
    pub async fn get_attendance(
        &self,
        req: &HttpRequest,
        record_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_attendance(self, req, record_id).await
    }

    // 列出出勤记录（可按学生/课程过滤）
    pub async fn list_attendance(
        &self,
        req: &HttpRequest,
        query: AttendanceQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, req, query).await
    }

    // 更新出勤记录
    pub async fn update_attendance(
        &self,
        req: &HttpRequest,
        record_id: i64,
        update_data: UpdateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, req, record_id, update_data).await
    }

    // 删除出勤记录
    pub async fn delete_attendance(
        &self,
        req: &HttpRequest,
        record_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, req, record_id).await
    }

    // 某学生的出勤统计
    pub async fn get_student_statistics(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        statistics::get_student_statistics(self, req, student_id).await
    }
}
