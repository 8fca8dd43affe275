use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::model::constants::DEFAULT_HISTORY_LENGTH;

/// The most recent ratings of a player, oldest first.
///
/// Holds at most `capacity` entries; pushing onto a full history evicts the oldest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistory {
    capacity: usize,
    ratings: VecDeque<i32>
}

impl Default for RatingHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LENGTH)
    }
}

impl RatingHistory {
    pub fn with_capacity(capacity: usize) -> RatingHistory {
        RatingHistory {
            capacity,
            ratings: VecDeque::with_capacity(capacity)
        }
    }

    /// Builds a history from existing ratings, keeping only the newest `capacity`.
    pub fn from_ratings(ratings: &[i32], capacity: usize) -> RatingHistory {
        let mut history = Self::with_capacity(capacity);
        for rating in ratings {
            history.push(*rating);
        }

        history
    }

    pub fn push(&mut self, rating: i32) {
        if self.capacity == 0 {
            return;
        }

        while self.ratings.len() >= self.capacity {
            self.ratings.pop_front();
        }

        self.ratings.push_back(rating);
    }

    pub fn latest(&self) -> Option<i32> {
        self.ratings.back().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.ratings.iter().copied().collect()
    }
}
