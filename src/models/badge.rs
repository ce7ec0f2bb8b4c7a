use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Awardable achievement definition. `requirement_type` + `requirement_value`
/// drive auto-awarding (e.g. MODULE_COMPLETE + module name).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "badges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub badge_type: String,
    pub requirement_type: Option<String>,
    pub requirement_value: Option<String>,
    pub rarity: String,
    pub points: i32,
    pub order_index: i32,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_badge::Entity")]
    UserBadges,
}

impl Related<super::user_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBadges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
