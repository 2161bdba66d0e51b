//! 课程安排-组关联实体（多对多关联表）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule_item_groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub schedule_item_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schedule_items::Entity",
        from = "Column::ScheduleItemId",
        to = "super::schedule_items::Column::Id"
    )]
    ScheduleItem,
    #[sea_orm(
        belongs_to = "super::groups::Entity",
        from = "Column::GroupId",
        to = "super::groups::Column::Id"
    )]
    Group,
}

impl Related<super::schedule_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleItem.def()
    }
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
