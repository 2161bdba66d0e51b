//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub short_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub credits: Option<i32>,
    // JSON 序列化的 LessonType 列表
    #[sea_orm(column_type = "Text")]
    pub lesson_types: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discipline_groups::Entity")]
    DisciplineGroups,
    #[sea_orm(has_many = "super::schedule_items::Entity")]
    ScheduleItems,
}

impl Related<super::discipline_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DisciplineGroups.def()
    }
}

impl Related<super::schedule_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        use crate::models::subjects::entities::{LessonType, Subject};
        use chrono::{DateTime, Utc};

        Subject {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
            description: self.description,
            credits: self.credits,
            lesson_types: serde_json::from_str::<Vec<LessonType>>(&self.lesson_types)
                .unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
