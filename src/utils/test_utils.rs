use crate::model::{
    matchday::PlayerOutcome,
    progression::progress_rating,
    rating_tracker::RatingTracker,
    structures::{
        match_performance::MatchPerformance, player_rating_state::PlayerRatingState, player_record::PlayerEntry
    }
};
use rand::{seq::IndexedRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Once;

static INIT: Once = Once::new();

const BADGE_POOL: [&str; 5] = ["Trabalhador", "Preguiçoso", "Consistente", "Capitão", "Veloz"];

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A random but well-formed player: rating in 0..=1000, potential at or above it,
/// and up to three badges (recognised or not).
pub fn generate_player_state(rng: &mut ChaCha8Rng) -> PlayerRatingState {
    let current_rating = rng.random_range(0..=1000) as f64;
    let potential_rating = current_rating + rng.random_range(0..=300) as f64;
    let n_badges = rng.random_range(0..=3);
    let badges = (0..n_badges)
        .filter_map(|_| BADGE_POOL.choose(rng).copied())
        .collect::<Vec<_>>();

    PlayerRatingState::new(current_rating, potential_rating).with_badges(badges)
}

pub fn generate_entry(player_id: i32, current_rating: i32, potential_rating: i32) -> PlayerEntry {
    PlayerEntry {
        player_id,
        name: None,
        current_rating,
        potential_rating,
        badges: Vec::new(),
        history: Vec::new()
    }
}

/// A tracker with players `1..=n`, seeded for reproducible results.
pub fn generate_tracker(n: i32) -> RatingTracker {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let entries = (1..=n)
        .map(|id| {
            let state = generate_player_state(&mut rng);
            PlayerEntry {
                badges: state.badges,
                ..generate_entry(id, state.current_rating as i32, state.potential_rating as i32)
            }
        })
        .collect();

    RatingTracker::from_entries(entries, 5).expect("generated player ids are unique")
}

pub fn generate_outcome(player_id: i32, rating_before: i32, rating_after: i32) -> PlayerOutcome {
    let result = progress_rating(
        &PlayerRatingState::new(rating_before as f64, rating_after.max(rating_before) as f64),
        &MatchPerformance::new(6.0)
    );

    PlayerOutcome {
        player_id,
        rating_before,
        rating_after,
        delta: rating_after - rating_before,
        breakdown: result.breakdown
    }
}
