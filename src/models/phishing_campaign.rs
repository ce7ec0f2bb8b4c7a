use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One send of a phishing template to all active users. Counters are
/// recomputed from trackers; click/open/report rates are derived at
/// mapping time and never stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "phishing_campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub template_id: i64,
    pub sent_at: DateTimeUtc,
    pub total_sent: i32,
    pub total_clicked: i32,
    pub total_opened: i32,
    pub total_reported: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::phishing_template::Entity",
        from = "Column::TemplateId",
        to = "super::phishing_template::Column::Id"
    )]
    Template,
    #[sea_orm(has_many = "super::phishing_tracker::Entity")]
    Trackers,
}

impl Related<super::phishing_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl Related<super::phishing_tracker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trackers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
