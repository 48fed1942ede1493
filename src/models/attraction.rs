// src/models/attraction.rs
use serde::{Deserialize, Serialize};
use crate::models::{flag, text};
use crate::models::review::Review;

/// An attraction of the park, as served by the `/attraction` routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attraction {
    #[serde(default)]
    pub attraction_id: i64,   // 0 until the server has stored it
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(default, deserialize_with = "text::deserialize_nullable")]
    pub description: String,
    #[serde(rename = "difficulte")]
    pub difficulty: i32,
    #[serde(with = "flag::as_int", default = "visible_by_default")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critiques: Option<Vec<Review>>, // only filled by `/attraction/visible/critiques`
}

fn visible_by_default() -> bool {
    true
}

impl Attraction {
    pub fn reviews(&self) -> &[Review] {
        self.critiques.as_deref().unwrap_or_default()
    }

    /// Mean rating of the nested reviews, if there are any.
    pub fn average_rating(&self) -> Option<f32> {
        let reviews = self.reviews();
        if reviews.is_empty() {
            return None;
        }
        let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
        Some(total as f32 / reviews.len() as f32)
    }
}
