use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-recipient record for one simulated phishing email. The token is the
/// only externally presented identifier; anyone holding it may hit the
/// tracking endpoints.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "phishing_trackers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub token: String,
    pub user_id: i64,
    pub campaign_id: i64,
    pub clicked: bool,
    pub clicked_at: Option<DateTimeUtc>,
    pub opened: bool,
    pub opened_at: Option<DateTimeUtc>,
    pub reported: bool,
    pub reported_at: Option<DateTimeUtc>,
    pub sent_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::phishing_campaign::Entity",
        from = "Column::CampaignId",
        to = "super::phishing_campaign::Column::Id"
    )]
    Campaign,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::phishing_campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
