//! 成绩存储操作

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::SeaOrmStorage;
use crate::entity::grades;
use crate::errors::Result;
use crate::models::grades::{
    entities::Grade,
    requests::{CreateGradeRequest, GradeQuery, UpdateGradeRequest},
};

impl SeaOrmStorage {
    pub(crate) async fn create_grade_impl(&self, grade: CreateGradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now();
        // 未指定日期时默认取当天
        let date = grade.date.unwrap_or_else(|| now.date_naive());

        let active = grades::ActiveModel {
            student_id: Set(grade.student_id),
            subject_id: Set(grade.subject_id),
            teacher_id: Set(grade.teacher_id),
            grade_type: Set(grade.grade_type.to_string()),
            lesson_type: Set(grade.lesson_type.map(|t| t.to_string())),
            value: Set(grade.value),
            date: Set(date.to_string()),
            comment: Set(grade.comment),
            created_at: Set(now.timestamp()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into_grade())
    }

    pub(crate) async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let grade = grades::Entity::find_by_id(id).one(&self.db).await?;
        Ok(grade.map(|g| g.into_grade()))
    }

    pub(crate) async fn list_grades_impl(&self, query: GradeQuery) -> Result<Vec<Grade>> {
        let mut select = grades::Entity::find();
        if let Some(student_id) = query.student_id {
            select = select.filter(grades::Column::StudentId.eq(student_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(grades::Column::SubjectId.eq(subject_id));
        }
        let models = select
            .order_by_asc(grades::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_grade()).collect())
    }

    pub(crate) async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        let Some(existing) = grades::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: grades::ActiveModel = existing.into();
        if let Some(grade_type) = update.grade_type {
            active.grade_type = Set(grade_type.to_string());
        }
        if let Some(lesson_type) = update.lesson_type {
            active.lesson_type = Set(Some(lesson_type.to_string()));
        }
        if let Some(value) = update.value {
            active.value = Set(value);
        }
        if let Some(date) = update.date {
            active.date = Set(date.to_string());
        }
        if let Some(comment) = update.comment {
            active.comment = Set(Some(comment));
        }

        let model = active.update(&self.db).await?;
        Ok(Some(model.into_grade()))
    }

    pub(crate) async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = grades::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
