//! 课程-组分配存储操作

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::SeaOrmStorage;
use crate::entity::discipline_groups;
use crate::errors::Result;
use crate::models::discipline_groups::{
    entities::DisciplineGroup,
    requests::{CreateDisciplineGroupRequest, DisciplineGroupQuery, UpdateDisciplineGroupRequest},
};

impl SeaOrmStorage {
    pub(crate) async fn create_discipline_group_impl(
        &self,
        assignment: CreateDisciplineGroupRequest,
    ) -> Result<DisciplineGroup> {
        let active = discipline_groups::ActiveModel {
            subject_id: Set(assignment.subject_id),
            group_id: Set(assignment.group_id),
            teacher_id: Set(assignment.teacher_id),
            semester: Set(assignment.semester),
            year: Set(assignment.year),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into_discipline_group())
    }

    pub(crate) async fn get_discipline_group_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<DisciplineGroup>> {
        let model = discipline_groups::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.into_discipline_group()))
    }

    pub(crate) async fn list_discipline_groups_impl(
        &self,
        query: DisciplineGroupQuery,
    ) -> Result<Vec<DisciplineGroup>> {
        let mut select = discipline_groups::Entity::find();
        if let Some(group_id) = query.group_id {
            select = select.filter(discipline_groups::Column::GroupId.eq(group_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(discipline_groups::Column::SubjectId.eq(subject_id));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(discipline_groups::Column::TeacherId.eq(teacher_id));
        }
        let models = select
            .order_by_asc(discipline_groups::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_discipline_group()).collect())
    }

    pub(crate) async fn update_discipline_group_impl(
        &self,
        id: i64,
        update: UpdateDisciplineGroupRequest,
    ) -> Result<Option<DisciplineGroup>> {
        let Some(existing) = discipline_groups::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: discipline_groups::ActiveModel = existing.into();
        if let Some(teacher_id) = update.teacher_id {
            active.teacher_id = Set(Some(teacher_id));
        }
        if let Some(semester) = update.semester {
            active.semester = Set(semester);
        }
        if let Some(year) = update.year {
            active.year = Set(year);
        }

        let model = active.update(&self.db).await?;
        Ok(Some(model.into_discipline_group()))
    }

    pub(crate) async fn delete_discipline_group_impl(&self, id: i64) -> Result<bool> {
        let result = discipline_groups::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
