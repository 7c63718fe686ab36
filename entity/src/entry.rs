use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Category;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub playthrough_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(120))")]
    pub title: String,
    pub category: Category,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // Deleting a playthrough with entries is rejected; callers remove entries first.
    #[sea_orm(
        belongs_to = "super::playthrough::Entity",
        from = "Column::PlaythroughId",
        to = "super::playthrough::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Playthrough,
}

impl Related<super::playthrough::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playthrough.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
