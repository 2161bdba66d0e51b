//! 课程存储操作
//!
//! 课程删除同样是显式有序级联：课程安排（整条）→ 课程-组分配 → 课程本身。

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use super::SeaOrmStorage;
use crate::entity::{discipline_groups, schedule_item_groups, schedule_items, subjects};
use crate::errors::Result;
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};

impl SeaOrmStorage {
    pub(crate) async fn create_subject_impl(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let active = subjects::ActiveModel {
            name: Set(subject.name),
            short_name: Set(subject.short_name),
            description: Set(subject.description),
            credits: Set(subject.credits),
            lesson_types: Set(serde_json::to_string(&subject.lesson_types)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into_subject())
    }

    pub(crate) async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let subject = subjects::Entity::find_by_id(id).one(&self.db).await?;
        Ok(subject.map(|s| s.into_subject()))
    }

    pub(crate) async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let models = subjects::Entity::find()
            .order_by_asc(subjects::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 某教师通过课程-组分配可见的课程（去重，按 ID 排序）
    pub(crate) async fn list_subjects_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<Subject>> {
        let subject_ids: Vec<i64> = discipline_groups::Entity::find()
            .filter(discipline_groups::Column::TeacherId.eq(teacher_id))
            .select_only()
            .column(discipline_groups::Column::SubjectId)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await?;

        if subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = subjects::Entity::find()
            .filter(subjects::Column::Id.is_in(subject_ids))
            .order_by_asc(subjects::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_subject()).collect())
    }

    pub(crate) async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let Some(existing) = subjects::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: subjects::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(short_name) = update.short_name {
            active.short_name = Set(short_name);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(credits) = update.credits {
            active.credits = Set(Some(credits));
        }
        if let Some(lesson_types) = update.lesson_types {
            active.lesson_types = Set(serde_json::to_string(&lesson_types)?);
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        let model = active.update(&self.db).await?;
        Ok(Some(model.into_subject()))
    }

    pub(crate) async fn subject_exists_impl(&self, id: i64) -> Result<bool> {
        let count = subjects::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    /// 删除课程及其全部关联行。
    ///
    /// 顺序固定：该课程的课程安排（整条，含组关联行）→ 课程-组分配 → 课程本身。
    pub(crate) async fn delete_subject_with_relations_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let item_ids: Vec<i64> = schedule_items::Entity::find()
            .filter(schedule_items::Column::SubjectId.eq(id))
            .select_only()
            .column(schedule_items::Column::Id)
            .into_tuple()
            .all(&txn)
            .await?;

        if !item_ids.is_empty() {
            schedule_item_groups::Entity::delete_many()
                .filter(schedule_item_groups::Column::ScheduleItemId.is_in(item_ids.clone()))
                .exec(&txn)
                .await?;
            schedule_items::Entity::delete_many()
                .filter(schedule_items::Column::Id.is_in(item_ids))
                .exec(&txn)
                .await?;
        }

        discipline_groups::Entity::delete_many()
            .filter(discipline_groups::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;

        let result = subjects::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    pub(crate) async fn count_schedule_items_by_subject_impl(&self, subject_id: i64) -> Result<u64> {
        let count = schedule_items::Entity::find()
            .filter(schedule_items::Column::SubjectId.eq(subject_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    pub(crate) async fn count_discipline_groups_by_subject_impl(
        &self,
        subject_id: i64,
    ) -> Result<u64> {
        let count = discipline_groups::Entity::find()
            .filter(discipline_groups::Column::SubjectId.eq(subject_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
