// src/models/review.rs
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use crate::models::{flag, text};

/// Ratings a visitor can give, in stars.
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// Last name stored on reviews left anonymously.
pub const ANONYMOUS_LAST_NAME: &str = "Anonyme";

pub fn is_valid_rating(rating: u8) -> bool {
    RATING_RANGE.contains(&rating)
}

/// A stored review ("critique") of an attraction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub critique_id: i64,
    pub attraction_id: i64,
    #[serde(rename = "nom", default, deserialize_with = "text::deserialize_nullable")]
    pub last_name: String,
    #[serde(rename = "prenom", default, deserialize_with = "text::deserialize_nullable")]
    pub first_name: String,
    #[serde(rename = "note")]
    pub rating: u8,
    #[serde(rename = "commentaire", default, deserialize_with = "text::deserialize_nullable")]
    pub comment: String,
    #[serde(rename = "est_anonyme", deserialize_with = "flag::deserialize", default)]
    pub is_anonymous: bool,
}

impl Review {
    /// Name shown under the review.
    pub fn author(&self) -> String {
        if self.is_anonymous || self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Payload of `POST /critique`. Built by the review form, never edited afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewSubmission {
    pub attraction_id: i64,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "note")]
    pub rating: u8,
    #[serde(rename = "commentaire")]
    pub comment: String,
    #[serde(rename = "est_anonyme")]
    pub is_anonymous: bool,
}
