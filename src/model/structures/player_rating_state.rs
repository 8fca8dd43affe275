use serde::{Deserialize, Serialize};

/// The slice of a player record the progression engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRatingState {
    pub current_rating: f64,
    pub potential_rating: f64,
    #[serde(default)]
    pub badges: Vec<String>
}

impl PlayerRatingState {
    pub fn new(current_rating: f64, potential_rating: f64) -> PlayerRatingState {
        PlayerRatingState {
            current_rating,
            potential_rating,
            badges: Vec::new()
        }
    }

    pub fn with_badges<S: Into<String>>(mut self, badges: impl IntoIterator<Item = S>) -> PlayerRatingState {
        self.badges = badges.into_iter().map(Into::into).collect();
        self
    }
}
