use serde::Deserialize;
use serde_json::Value;

use crate::models::exercise::{Difficulty, ExerciseType};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExercise {
    pub topic: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub difficulty: Difficulty,
    pub payload_json: Value,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseFilter {
    pub topic: Option<String>,
    #[serde(rename = "type")]
    pub exercise_type: Option<ExerciseType>,
    pub difficulty: Option<Difficulty>,
}

/// Body of POST /api/exercises/{id}/submit. The result is recorded for
/// the authenticated user. `success` defaults to a score threshold when
/// omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResult {
    pub score: f64,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub duration_secs: Option<i64>,
    #[serde(default)]
    pub details_json: Option<Value>,
}
