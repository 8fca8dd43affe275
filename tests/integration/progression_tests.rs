#[path = "../common/mod.rs"]
mod common;

use common::init_test_env;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use squad_progression::model::{
    constants::ProgressionConfig,
    matchday::{process_matchday, PerformanceEntry},
    progress_rating,
    rating_tracker::RatingTracker,
    structures::{match_performance::MatchPerformance, player_rating_state::PlayerRatingState, player_record::PlayerEntry}
};

fn rating_after(current: f64, potential: f64, grade: f64, badges: &[&str]) -> i32 {
    let player = PlayerRatingState::new(current, potential).with_badges(badges.iter().copied());

    progress_rating(&player, &MatchPerformance::new(grade)).new_rating
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(rating_after(550.0, 800.0, 9.0, &[]), 573);
    assert_eq!(rating_after(850.0, 950.0, 4.0, &[]), 849);
    assert_eq!(rating_after(580.0, 800.0, 8.5, &["Trabalhador"]), 603);
    assert_eq!(rating_after(720.0, 850.0, 5.0, &["Consistente"]), 718);
    assert_eq!(rating_after(785.0, 800.0, 8.0, &[]), 790);
    assert_eq!(rating_after(650.0, 800.0, 6.0, &[]), 650);
}

#[test]
fn test_resistance_boundary() {
    // Distance 15 halves the gain, distance 16 does not
    assert_eq!(rating_after(785.0, 800.0, 8.0, &[]), 790);
    assert_eq!(rating_after(784.0, 800.0, 8.0, &[]), 794);
}

#[test]
fn test_elite_player_at_ceiling() {
    assert_eq!(rating_after(895.0, 900.0, 9.5, &[]), 896);
    assert_eq!(rating_after(899.0, 900.0, 10.0, &["Trabalhador"]), 900);
    assert_eq!(rating_after(900.0, 900.0, 10.0, &["Trabalhador"]), 900);
}

#[test]
fn test_concurrent_calls_agree() {
    let player = PlayerRatingState::new(580.0, 800.0).with_badges(["Trabalhador"]);
    let expected = progress_rating(&player, &MatchPerformance::new(8.5));

    let handles = (0..8)
        .map(|_| {
            let player = player.clone();
            std::thread::spawn(move || progress_rating(&player, &MatchPerformance::new(8.5)))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Plays a seeded season of 38 match days for a full squad and checks that
/// no player ever leaves `[0, potential]` and histories stay bounded.
#[test]
fn test_season_keeps_ratings_in_bounds() {
    init_test_env();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let badges = ["Trabalhador", "Preguiçoso", "Consistente"];

    let entries = (1..=25)
        .map(|id| {
            let current_rating = rng.random_range(300..=900);
            PlayerEntry {
                player_id: id,
                name: None,
                current_rating,
                potential_rating: current_rating + rng.random_range(0..=200),
                badges: vec![badges[rng.random_range(0..badges.len())].to_string()],
                history: Vec::new()
            }
        })
        .collect::<Vec<_>>();
    let mut tracker = RatingTracker::from_entries(entries, 5).unwrap();
    let config = ProgressionConfig::default();

    for _ in 0..38 {
        // Roughly eleven starters and a few substitutes each match day
        let performances = tracker
            .players()
            .filter_map(|p| {
                rng.random_bool(0.6).then(|| PerformanceEntry {
                    player_id: p.player_id,
                    phase_grade: rng.random_range(3.0..=10.0)
                })
            })
            .collect::<Vec<_>>();

        let report = process_matchday(&config, &tracker, &performances, None).unwrap();
        assert_eq!(report.outcomes.len(), performances.len());
        tracker.apply(&report);

        for player in tracker.players() {
            assert!(player.current_rating >= 0);
            assert!(player.current_rating <= player.potential_rating);
            assert!(player.history.len() <= 5);
        }
    }
}
