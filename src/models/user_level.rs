use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One-per-user leveling state.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub current_level: i32,
    pub total_xp: i32,
    pub xp_to_next_level: i32,
    pub modules_completed: i32,
    pub total_badges: i32,
    pub streak_days: i32,
    pub last_activity_date: Option<Date>,
    pub rank: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
