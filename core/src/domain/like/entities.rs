use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{common::format_timestamp, like::value_objects::SaveLikeCommand};

/// A denormalized like row in the single-table layout.
///
/// Primary identity is `(PK, SK)` — at most one record exists per
/// `(userId, mealId)` pair, enforced by the store's conditional write.
/// `GSI1*` serves "who liked this meal"; `GSI2*` serves "this user's likes
/// in time order" (timestamp-first sort key). Serde field names are the
/// persisted attribute names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeRecord {
    #[serde(rename = "PK")]
    pub pk: String,
    #[serde(rename = "SK")]
    pub sk: String,
    #[serde(rename = "GSI1PK")]
    pub gsi1_pk: String,
    #[serde(rename = "GSI1SK")]
    pub gsi1_sk: String,
    #[serde(rename = "GSI2PK")]
    pub gsi2_pk: String,
    #[serde(rename = "GSI2SK")]
    pub gsi2_sk: String,

    #[serde(rename = "mealId")]
    pub meal_id: String,
    #[serde(rename = "mealName")]
    pub meal_name: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub ingredients: Vec<Value>,
    #[serde(rename = "likedAt")]
    pub liked_at: String,
    // Always equals likedAt; no mutation path writes it, kept for layout
    // compatibility.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub source: String,
}

impl LikeRecord {
    pub fn new(command: SaveLikeCommand, liked_at: DateTime<Utc>) -> Self {
        let ts = format_timestamp(liked_at);

        Self {
            pk: format!("USER#{}", command.user_id),
            sk: format!("LIKE#{}", command.meal_id),
            gsi1_pk: format!("MEAL#{}", command.meal_id),
            gsi1_sk: format!("USER#{}", command.user_id),
            gsi2_pk: format!("USER#{}", command.user_id),
            gsi2_sk: format!("{ts}#LIKE#{}", command.meal_id),
            meal_id: command.meal_id,
            meal_name: command.meal_name,
            image_url: command.image_url,
            ingredients: command.ingredients,
            liked_at: ts.clone(),
            updated_at: ts,
            source: command.source,
        }
    }
}
