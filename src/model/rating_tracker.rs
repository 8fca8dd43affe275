use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    error::ProcessorError,
    model::{
        constants::DEFAULT_HISTORY_LENGTH,
        matchday::MatchdayReport,
        structures::player_record::{PlayerEntry, PlayerRecord}
    }
};

/// In-memory player store for a match day run.
///
/// Players keep the order they were inserted in. The tracker, not the engine,
/// owns writing new ratings and appending them to each player's history.
pub struct RatingTracker {
    players: IndexMap<i32, PlayerRecord>,
    history_length: usize
}

impl Default for RatingTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LENGTH)
    }
}

impl RatingTracker {
    pub fn new(history_length: usize) -> RatingTracker {
        RatingTracker {
            players: IndexMap::new(),
            history_length
        }
    }

    /// Builds a tracker from match day entries. The same player id appearing twice is an error.
    pub fn from_entries(entries: Vec<PlayerEntry>, history_length: usize) -> Result<RatingTracker, ProcessorError> {
        let mut tracker = RatingTracker::new(history_length);

        for entry in entries {
            if tracker.players.contains_key(&entry.player_id) {
                return Err(ProcessorError::DuplicatePlayer(entry.player_id));
            }

            tracker.insert_or_update(PlayerRecord::from_entry(entry, history_length));
        }

        Ok(tracker)
    }

    /// Inserts a record, replacing any record with the same player id in place.
    pub fn insert_or_update(&mut self, record: PlayerRecord) {
        self.players.insert(record.player_id, record);
    }

    pub fn get(&self, player_id: i32) -> Option<&PlayerRecord> {
        self.players.get(&player_id)
    }

    pub fn contains(&self, player_id: i32) -> bool {
        self.players.contains_key(&player_id)
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn history_length(&self) -> usize {
        self.history_length
    }

    /// Writes every outcome's new rating back to its player and records it in the history.
    pub fn apply(&mut self, report: &MatchdayReport) {
        for outcome in &report.outcomes {
            match self.players.get_mut(&outcome.player_id) {
                Some(record) => {
                    record.current_rating = outcome.rating_after;
                    record.history.push(outcome.rating_after);

                    debug!(
                        player_id = outcome.player_id,
                        before = outcome.rating_before,
                        after = outcome.rating_after,
                        "Applied rating"
                    );
                }
                None => warn!(player_id = outcome.player_id, "Outcome for untracked player skipped")
            }
        }
    }

    pub fn entries(&self) -> Vec<PlayerEntry> {
        self.players.values().map(PlayerRecord::to_entry).collect()
    }
}
