//! 课程安排存储操作
//!
//! 条目与组关联行（schedule_item_groups）始终在同一事务内写入，
//! update 为全量替换：保留 ID，覆盖所有列并重建关联行。

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use super::SeaOrmStorage;
use crate::entity::{schedule_item_groups, schedule_items};
use crate::errors::Result;
use crate::models::schedule::{
    entities::ScheduleItem,
    requests::{ScheduleItemData, ScheduleQuery},
};

impl SeaOrmStorage {
    pub(crate) async fn create_schedule_item_impl(
        &self,
        data: &ScheduleItemData,
    ) -> Result<ScheduleItem> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await?;

        let active = schedule_items::ActiveModel {
            date: Set(data.date.to_string()),
            start_time: Set(data.start_time.to_string()),
            end_time: Set(data.end_time.to_string()),
            subject_id: Set(data.subject_id),
            teacher_id: Set(data.teacher_id),
            lesson_type: Set(data.lesson_type.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let model = active.insert(&txn).await?;

        for group_id in &data.group_ids {
            schedule_item_groups::ActiveModel {
                schedule_item_id: Set(model.id),
                group_id: Set(*group_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(model.into_schedule_item(data.group_ids.clone()))
    }

    pub(crate) async fn get_schedule_item_by_id_impl(&self, id: i64) -> Result<Option<ScheduleItem>> {
        let Some(model) = schedule_items::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let group_ids = self.schedule_item_group_ids(id).await?;
        Ok(Some(model.into_schedule_item(group_ids)))
    }

    pub(crate) async fn list_schedule_items_impl(
        &self,
        query: ScheduleQuery,
    ) -> Result<Vec<ScheduleItem>> {
        let mut select = schedule_items::Entity::find();
        if let Some(date) = query.date {
            select = select.filter(schedule_items::Column::Date.eq(date.to_string()));
        }
        if let Some(group_id) = query.group_id {
            let item_ids: Vec<i64> = schedule_item_groups::Entity::find()
                .filter(schedule_item_groups::Column::GroupId.eq(group_id))
                .select_only()
                .column(schedule_item_groups::Column::ScheduleItemId)
                .into_tuple()
                .all(&self.db)
                .await?;
            select = select.filter(schedule_items::Column::Id.is_in(item_ids));
        }

        let models = select
            .order_by_asc(schedule_items::Column::Date)
            .order_by_asc(schedule_items::Column::StartTime)
            .order_by_asc(schedule_items::Column::Id)
            .all(&self.db)
            .await?;

        let mut items = Vec::with_capacity(models.len());
        for model in models {
            let group_ids = self.schedule_item_group_ids(model.id).await?;
            items.push(model.into_schedule_item(group_ids));
        }
        Ok(items)
    }

    /// 全量替换：覆盖所有列并重建组关联行，保留 ID
    pub(crate) async fn update_schedule_item_impl(
        &self,
        id: i64,
        data: &ScheduleItemData,
    ) -> Result<Option<ScheduleItem>> {
        let txn = self.db.begin().await?;

        let Some(existing) = schedule_items::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active: schedule_items::ActiveModel = existing.into();
        active.date = Set(data.date.to_string());
        active.start_time = Set(data.start_time.to_string());
        active.end_time = Set(data.end_time.to_string());
        active.subject_id = Set(data.subject_id);
        active.teacher_id = Set(data.teacher_id);
        active.lesson_type = Set(data.lesson_type.to_string());
        active.updated_at = Set(chrono::Utc::now().timestamp());
        let model = active.update(&txn).await?;

        schedule_item_groups::Entity::delete_many()
            .filter(schedule_item_groups::Column::ScheduleItemId.eq(id))
            .exec(&txn)
            .await?;
        for group_id in &data.group_ids {
            schedule_item_groups::ActiveModel {
                schedule_item_id: Set(id),
                group_id: Set(*group_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(Some(model.into_schedule_item(data.group_ids.clone())))
    }

    pub(crate) async fn delete_schedule_item_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        schedule_item_groups::Entity::delete_many()
            .filter(schedule_item_groups::Column::ScheduleItemId.eq(id))
            .exec(&txn)
            .await?;
        let result = schedule_items::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    async fn schedule_item_group_ids(&self, item_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = schedule_item_groups::Entity::find()
            .filter(schedule_item_groups::Column::ScheduleItemId.eq(item_id))
            .order_by_asc(schedule_item_groups::Column::GroupId)
            .select_only()
            .column(schedule_item_groups::Column::GroupId)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(ids)
    }
}
