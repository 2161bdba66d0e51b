//! 课程安排实体
//!
//! 一次授课安排：日期、起止时间、课程、教师与课型。
//! 参与的学生组通过 schedule_item_groups 关联表维护。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    // ISO 8601 日期字符串 (YYYY-MM-DD)
    pub date: String,
    // HH:MM:SS
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub lesson_type: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::schedule_item_groups::Entity")]
    ScheduleItemGroups,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::schedule_item_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleItemGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_schedule_item(
        self,
        group_ids: Vec<i64>,
    ) -> crate::models::schedule::entities::ScheduleItem {
        use crate::models::schedule::entities::ScheduleItem;
        use crate::models::subjects::entities::LessonType;
        use chrono::{DateTime, Utc};

        ScheduleItem {
            id: self.id,
            date: self.date.parse().unwrap_or_default(),
            start_time: self.start_time.parse().unwrap_or_default(),
            end_time: self.end_time.parse().unwrap_or_default(),
            group_ids,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            lesson_type: self
                .lesson_type
                .parse::<LessonType>()
                .unwrap_or(LessonType::Lecture),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
