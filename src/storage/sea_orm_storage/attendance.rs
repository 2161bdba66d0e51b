//! 出勤存储操作

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::SeaOrmStorage;
use crate::entity::attendance;
use crate::errors::Result;
use crate::models::attendance::{
    entities::Attendance,
    requests::{AttendanceQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
};

impl SeaOrmStorage {
    pub(crate) async fn create_attendance_impl(
        &self,
        record: CreateAttendanceRequest,
    ) -> Result<Attendance> {
        let now = chrono::Utc::now();
        // 未指定日期时默认取当天
        let date = record.date.unwrap_or_else(|| now.date_naive());

        let active = attendance::ActiveModel {
            student_id: Set(record.student_id),
            subject_id: Set(record.subject_id),
            status: Set(record.status.to_string()),
            date: Set(date.to_string()),
            created_at: Set(now.timestamp()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into_attendance())
    }

    pub(crate) async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<Attendance>> {
        let record = attendance::Entity::find_by_id(id).one(&self.db).await?;
        Ok(record.map(|r| r.into_attendance()))
    }

    pub(crate) async fn list_attendance_impl(
        &self,
        query: AttendanceQuery,
    ) -> Result<Vec<Attendance>> {
        let mut select = attendance::Entity::find();
        if let Some(student_id) = query.student_id {
            select = select.filter(attendance::Column::StudentId.eq(student_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(attendance::Column::SubjectId.eq(subject_id));
        }
        let models = select
            .order_by_asc(attendance::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_attendance()).collect())
    }

    pub(crate) async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        let Some(existing) = attendance::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: attendance::ActiveModel = existing.into();
        if let Some(status) = update.status {
            active.status = Set(status.to_string());
        }
        if let Some(date) = update.date {
            active.date = Set(date.to_string());
        }

        let model = active.update(&self.db).await?;
        Ok(Some(model.into_attendance()))
    }

    pub(crate) async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = attendance::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
