use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identifier assigned by the central server; upsert key during sync.
    #[sea_orm(unique)]
    pub central_id: Option<String>,
    pub version: Option<String>,
    pub synced_at: Option<DateTimeUtc>,
    pub topic: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub difficulty: Difficulty,
    pub payload_json: Json,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    #[sea_orm(string_value = "QUIZ")]
    Quiz,
    #[sea_orm(string_value = "SIMULATION")]
    Simulation,
    #[sea_orm(string_value = "SCENARIO")]
    Scenario,
    #[sea_orm(string_value = "CHALLENGE")]
    Challenge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[sea_orm(string_value = "BEGINNER")]
    Beginner,
    #[sea_orm(string_value = "INTERMEDIATE")]
    Intermediate,
    #[sea_orm(string_value = "ADVANCED")]
    Advanced,
    #[sea_orm(string_value = "EXPERT")]
    Expert,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_exercise_result::Entity")]
    Results,
}

impl Related<super::user_exercise_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Results.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
