use crate::model::{
    constants::ProgressionConfig,
    rating_utils::{clamp_rating, finite_or, round_half_up},
    structures::{
        badge::Badge,
        match_performance::MatchPerformance,
        player_rating_state::PlayerRatingState,
        progression_result::{ProgressionBreakdown, ProgressionResult},
        volatility_tier::VolatilityTier
    }
};

/// Computes a player's rating after one match using the shipped game balance.
///
/// See [`progress_rating_with`].
pub fn progress_rating(player: &PlayerRatingState, performance: &MatchPerformance) -> ProgressionResult {
    progress_rating_with(&ProgressionConfig::DEFAULT, player, performance)
}

/// # Rating progression
///
/// Steps, each consuming the previous stage's delta:
/// 1. Base delta: `(grade - equilibrium) * base_multiplier`.
/// 2. Volatility: scaled by the player's [`VolatilityTier`].
/// 3. Ceiling resistance: a positive delta is halved when the player sits
///     within `resistance_distance` points (inclusive) of their potential.
/// 4. Badges: each distinct recognised badge, in canonical order.
/// 5. The new rating is rounded half up and clamped into `[0, potential]`.
///
/// The function is total. A non-finite grade counts as the equilibrium grade and
/// non-finite ratings count as 0.
pub fn progress_rating_with(
    config: &ProgressionConfig,
    player: &PlayerRatingState,
    performance: &MatchPerformance
) -> ProgressionResult {
    let grade = finite_or(performance.phase_grade, config.equilibrium_grade);
    let current = finite_or(player.current_rating, 0.0);
    let potential = finite_or(player.potential_rating, 0.0);

    let base_delta = (grade - config.equilibrium_grade) * config.base_multiplier;

    let volatility_tier = VolatilityTier::for_rating(current, config);
    let volatility_multiplier = volatility_tier.multiplier(config);
    let mut delta = base_delta * volatility_multiplier;

    let distance_to_potential = potential - current;
    let ceiling_resistance_applied = distance_to_potential <= config.resistance_distance && delta > 0.0;
    if ceiling_resistance_applied {
        delta *= config.resistance_factor;
    }

    let badges_applied: Vec<Badge> = Badge::resolve(&player.badges).into_iter().collect();
    for badge in &badges_applied {
        delta = badge.apply(delta, config);
    }

    let new_rating = clamp_rating(round_half_up(current + delta), potential);
    let rating_before = round_half_up(current) as i32;
    // Widened so a saturated `rating_before` cannot overflow
    let rating_delta =
        (i64::from(new_rating) - i64::from(rating_before)).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    ProgressionResult {
        new_rating,
        delta: rating_delta,
        breakdown: ProgressionBreakdown {
            base_delta,
            volatility_tier,
            volatility_multiplier,
            distance_to_potential,
            ceiling_resistance_applied,
            badges_applied,
            final_delta: delta
        }
    }
}
