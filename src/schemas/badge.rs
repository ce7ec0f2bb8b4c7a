use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::badge;

/// Badge as shown to a specific user. `earned` is only meaningful for the
/// "all badges" listing; the earned-only listing always sets it true.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeResponse {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub badge_type: String,
    pub rarity: String,
    pub points: i32,
    pub order_index: i32,
    pub earned: bool,
    pub earned_at: Option<DateTime<Utc>>,
}

impl BadgeResponse {
    pub fn from_badge(badge: badge::Model, earned_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: badge.id,
            name: badge.name,
            display_name: badge.display_name,
            description: badge.description,
            icon_url: badge.icon_url,
            badge_type: badge.badge_type,
            rarity: badge.rarity,
            points: badge.points,
            order_index: badge.order_index,
            earned: earned_at.is_some(),
            earned_at,
        }
    }
}
