use serde::{Deserialize, Serialize};

use crate::model::structures::{player_rating_state::PlayerRatingState, rating_history::RatingHistory};

/// A player as held by the caller: persisted ratings plus the recent history.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub player_id: i32,
    pub name: Option<String>,
    pub current_rating: i32,
    pub potential_rating: i32,
    pub badges: Vec<String>,
    pub history: RatingHistory
}

impl PlayerRecord {
    pub fn state(&self) -> PlayerRatingState {
        PlayerRatingState {
            current_rating: self.current_rating as f64,
            potential_rating: self.potential_rating as f64,
            badges: self.badges.clone()
        }
    }

    pub fn from_entry(entry: PlayerEntry, history_length: usize) -> PlayerRecord {
        PlayerRecord {
            player_id: entry.player_id,
            name: entry.name,
            current_rating: entry.current_rating,
            potential_rating: entry.potential_rating,
            badges: entry.badges,
            history: RatingHistory::from_ratings(&entry.history, history_length)
        }
    }

    pub fn to_entry(&self) -> PlayerEntry {
        PlayerEntry {
            player_id: self.player_id,
            name: self.name.clone(),
            current_rating: self.current_rating,
            potential_rating: self.potential_rating,
            badges: self.badges.clone(),
            history: self.history.to_vec()
        }
    }
}

/// Wire form of a [`PlayerRecord`] in match day files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub player_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub current_rating: i32,
    pub potential_rating: i32,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub history: Vec<i32>
}
