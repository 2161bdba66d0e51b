//! 学生存储操作

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::SeaOrmStorage;
use crate::entity::{attendance, grades, students};
use crate::errors::Result;
use crate::utils::escape_like_pattern;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
};

impl SeaOrmStorage {
    pub(crate) async fn create_student_impl(&self, student: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let active = students::ActiveModel {
            first_name: Set(student.first_name),
            last_name: Set(student.last_name),
            middle_name: Set(student.middle_name),
            date_born: Set(student.date_born.map(|d| d.to_string())),
            group_id: Set(student.group_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into_student())
    }

    pub(crate) async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let student = students::Entity::find_by_id(id).one(&self.db).await?;
        Ok(student.map(|s| s.into_student()))
    }

    pub(crate) async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let mut select = students::Entity::find();
        if let Some(group_id) = query.group_id {
            select = select.filter(students::Column::GroupId.eq(group_id));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let pattern = format!("%{}%", escape_like_pattern(search.trim()));
            select = select.filter(
                Condition::any()
                    .add(students::Column::LastName.like(&pattern))
                    .add(students::Column::FirstName.like(&pattern)),
            );
        }
        let models = select
            .order_by_asc(students::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_student()).collect())
    }

    pub(crate) async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = students::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: students::ActiveModel = existing.into();
        if let Some(first_name) = update.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(middle_name) = update.middle_name {
            active.middle_name = Set(Some(middle_name));
        }
        if let Some(date_born) = update.date_born {
            active.date_born = Set(Some(date_born.to_string()));
        }
        if let Some(group_id) = update.group_id {
            active.group_id = Set(Some(group_id));
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        let model = active.update(&self.db).await?;
        Ok(Some(model.into_student()))
    }

    /// 删除学生及其成绩/出勤记录，单事务
    pub(crate) async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        grades::Entity::delete_many()
            .filter(grades::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        attendance::Entity::delete_many()
            .filter(attendance::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        let result = students::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
