use serde::{Deserialize, Serialize};

use crate::model::structures::{badge::Badge, volatility_tier::VolatilityTier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionResult {
    pub new_rating: i32,
    pub delta: i32,
    pub breakdown: ProgressionBreakdown
}

/// Intermediate values of a single progression, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionBreakdown {
    pub base_delta: f64,
    pub volatility_tier: VolatilityTier,
    pub volatility_multiplier: f64,
    pub distance_to_potential: f64,
    pub ceiling_resistance_applied: bool,
    /// Badges whose effect was composed, in application order
    pub badges_applied: Vec<Badge>,
    /// Delta after every stage, before rounding and clamping
    pub final_delta: f64
}
