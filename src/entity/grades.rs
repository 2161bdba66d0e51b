//! 成绩实体
//!
//! 归属于学生，随学生一起被编排器级联删除。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: Option<i64>,
    pub grade_type: String,
    pub lesson_type: Option<String>,
    pub value: i32,
    pub date: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        use crate::models::grades::entities::{Grade, GradeType};
        use crate::models::subjects::entities::LessonType;
        use chrono::{DateTime, Utc};

        Grade {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            grade_type: self
                .grade_type
                .parse::<GradeType>()
                .unwrap_or(GradeType::Current),
            lesson_type: self.lesson_type.and_then(|s| s.parse::<LessonType>().ok()),
            value: self.value,
            date: self.date.parse().unwrap_or_default(),
            comment: self.comment,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
