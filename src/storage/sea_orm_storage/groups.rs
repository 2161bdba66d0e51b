//! 学生组存储操作
//!
//! 组删除是显式有序级联：课程安排（整条）→ 课程-组分配 → 学生（含成绩/出勤）→ 组本身，
//! 全部在一个事务内按序执行，任一步失败整体回滚。

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use super::SeaOrmStorage;
use crate::entity::{attendance, discipline_groups, grades, groups, schedule_item_groups, schedule_items, students};
use crate::errors::Result;
use crate::models::groups::{
    entities::Group,
    requests::{CreateGroupRequest, UpdateGroupRequest},
};

impl SeaOrmStorage {
    pub(crate) async fn create_group_impl(&self, group: CreateGroupRequest) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        let active = groups::ActiveModel {
            name: Set(group.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into_group())
    }

    pub(crate) async fn get_group_by_id_impl(&self, id: i64) -> Result<Option<Group>> {
        let group = groups::Entity::find_by_id(id).one(&self.db).await?;
        Ok(group.map(|g| g.into_group()))
    }

    pub(crate) async fn get_group_by_name_impl(&self, name: &str) -> Result<Option<Group>> {
        let group = groups::Entity::find()
            .filter(groups::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(group.map(|g| g.into_group()))
    }

    pub(crate) async fn list_groups_impl(&self) -> Result<Vec<Group>> {
        let models = groups::Entity::find()
            .order_by_asc(groups::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_group()).collect())
    }

    /// 某教师通过课程-组分配可见的组（去重，按 ID 排序）
    pub(crate) async fn list_groups_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Group>> {
        let group_ids: Vec<i64> = discipline_groups::Entity::find()
            .filter(discipline_groups::Column::TeacherId.eq(teacher_id))
            .select_only()
            .column(discipline_groups::Column::GroupId)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await?;

        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = groups::Entity::find()
            .filter(groups::Column::Id.is_in(group_ids))
            .order_by_asc(groups::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_group()).collect())
    }

    pub(crate) async fn update_group_impl(
        &self,
        id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        let Some(existing) = groups::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: groups::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        let model = active.update(&self.db).await?;
        Ok(Some(model.into_group()))
    }

    pub(crate) async fn group_exists_impl(&self, id: i64) -> Result<bool> {
        let count = groups::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    /// 删除组及其全部关联行。
    ///
    /// 顺序固定：课程安排（整条删除，含其全部组关联行）→ 课程-组分配
    /// → 学生的成绩与出勤 → 学生 → 组本身。外键均为 RESTRICT，
    /// 顺序颠倒会直接触发约束错误。
    pub(crate) async fn delete_group_with_relations_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        // 涉及该组的课程安排整条删除，即使还关联其他组
        let item_ids: Vec<i64> = schedule_item_groups::Entity::find()
            .filter(schedule_item_groups::Column::GroupId.eq(id))
            .select_only()
            .column(schedule_item_groups::Column::ScheduleItemId)
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
            .filter(discipline_groups::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;

        let student_ids: Vec<i64> = students::Entity::find()
            .filter(students::Column::GroupId.eq(id))
            .select_only()
            .column(students::Column::Id)
            .into_tuple()
            .all(&txn)
            .await?;

        if !student_ids.is_empty() {
            grades::Entity::delete_many()
                .filter(grades::Column::StudentId.is_in(student_ids.clone()))
                .exec(&txn)
                .await?;
            attendance::Entity::delete_many()
                .filter(attendance::Column::StudentId.is_in(student_ids.clone()))
                .exec(&txn)
                .await?;
            students::Entity::delete_many()
                .filter(students::Column::Id.is_in(student_ids))
                .exec(&txn)
                .await?;
        }

        let result = groups::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    pub(crate) async fn count_schedule_items_by_group_impl(&self, group_id: i64) -> Result<u64> {
        let count = schedule_item_groups::Entity::find()
            .filter(schedule_item_groups::Column::GroupId.eq(group_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    pub(crate) async fn count_students_by_group_impl(&self, group_id: i64) -> Result<u64> {
        let count = students::Entity::find()
            .filter(students::Column::GroupId.eq(group_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    pub(crate) async fn count_discipline_groups_by_group_impl(&self, group_id: i64) -> Result<u64> {
        let count = discipline_groups::Entity::find()
            .filter(discipline_groups::Column::GroupId.eq(group_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
