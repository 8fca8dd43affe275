use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::ProcessorError,
    model::{
        constants::ProgressionConfig,
        progression::progress_rating_with,
        rating_tracker::RatingTracker,
        structures::{badge::Badge, match_performance::MatchPerformance, progression_result::ProgressionBreakdown}
    },
    utils::progress_utils::progress_bar
};

/// A graded appearance in a match day file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub player_id: i32,
    pub phase_grade: f64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    pub player_id: i32,
    pub rating_before: i32,
    pub rating_after: i32,
    pub delta: i32,
    pub breakdown: ProgressionBreakdown
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchdayReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_at: Option<DateTime<FixedOffset>>,
    /// One outcome per participating player, in tracker order
    pub outcomes: Vec<PlayerOutcome>
}

impl MatchdayReport {
    pub fn outcome(&self, player_id: i32) -> Option<&PlayerOutcome> {
        self.outcomes.iter().find(|o| o.player_id == player_id)
    }

    /// Players who gained rating, biggest gain first.
    pub fn risers(&self) -> Vec<&PlayerOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.delta > 0)
            .sorted_by(|a, b| b.delta.cmp(&a.delta))
            .collect()
    }

    /// Players who lost rating, biggest loss first.
    pub fn fallers(&self) -> Vec<&PlayerOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.delta < 0)
            .sorted_by(|a, b| a.delta.cmp(&b.delta))
            .collect()
    }

    pub fn total_delta(&self) -> i64 {
        self.outcomes.iter().map(|o| o.delta as i64).sum()
    }
}

/// # Match day processing
///
/// Progresses every tracked player that has a performance for this match day.
/// Players without one are left out of the report and keep their rating.
///
/// Every performance must reference a tracked player and appear once; this is
/// checked before any rating is computed, so a failed call changes nothing.
/// Ratings are computed in parallel and reported in tracker order. The tracker
/// itself is not modified, see [`RatingTracker::apply`].
pub fn process_matchday(
    config: &ProgressionConfig,
    tracker: &RatingTracker,
    performances: &[PerformanceEntry],
    played_at: Option<DateTime<FixedOffset>>
) -> Result<MatchdayReport, ProcessorError> {
    let mut grades: HashMap<i32, MatchPerformance> = HashMap::with_capacity(performances.len());
    for entry in performances {
        if !tracker.contains(entry.player_id) {
            return Err(ProcessorError::UnknownPlayer(entry.player_id));
        }

        if grades
            .insert(entry.player_id, MatchPerformance::new(entry.phase_grade))
            .is_some()
        {
            return Err(ProcessorError::DuplicatePlayer(entry.player_id));
        }
    }

    let participants = tracker
        .players()
        .filter_map(|record| grades.get(&record.player_id).map(|performance| (record, *performance)))
        .collect::<Vec<_>>();

    info!(
        "Processing {} of {} players for match day",
        participants.len(),
        tracker.len()
    );

    let bar = progress_bar(participants.len() as u64, "Progressing player ratings".to_string());
    let outcomes = participants
        .par_iter()
        .map(|(record, performance)| {
            let unrecognised = Badge::unrecognised(&record.badges);
            if !unrecognised.is_empty() {
                debug!(player_id = record.player_id, badges = ?unrecognised, "Ignoring unrecognised badges");
            }

            let result = progress_rating_with(config, &record.state(), performance);

            if let Some(bar) = &bar {
                bar.inc(1);
            }

            PlayerOutcome {
                player_id: record.player_id,
                rating_before: record.current_rating,
                rating_after: result.new_rating,
                delta: result.delta,
                breakdown: result.breakdown
            }
        })
        .collect::<Vec<_>>();

    if let Some(bar) = &bar {
        bar.finish();
    }

    let report = MatchdayReport { played_at, outcomes };
    info!(
        "Match day processed: {} risers, {} fallers, net change {}",
        report.risers().len(),
        report.fallers().len(),
        report.total_delta()
    );

    Ok(report)
}
