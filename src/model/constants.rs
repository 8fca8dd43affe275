use serde::{Deserialize, Serialize};

use crate::error::ProcessorError;

// Game balance constants
pub const EQUILIBRIUM_GRADE: f64 = 6.0;
pub const BASE_MULTIPLIER: f64 = 5.0;
pub const LOW_RATING_THRESHOLD: f64 = 600.0;
pub const HIGH_RATING_THRESHOLD: f64 = 800.0;
pub const LOW_RATING_VOLATILITY: f64 = 1.5;
pub const BASELINE_VOLATILITY: f64 = 1.0;
pub const HIGH_RATING_VOLATILITY: f64 = 0.15;
pub const RESISTANCE_DISTANCE: f64 = 15.0;
pub const RESISTANCE_FACTOR: f64 = 0.5;
// Badge constants
pub const HARD_WORKER_GAIN: f64 = 1.2;
pub const LAZY_LOSS: f64 = 1.2;
pub const CONSISTENT_LOSS: f64 = 0.5;
// Tracker constants
pub const DEFAULT_HISTORY_LENGTH: usize = 5;

/// Every tunable the progression engine reads.
///
/// [`ProgressionConfig::DEFAULT`] holds the shipped game balance; a config
/// file only needs to name the fields it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub equilibrium_grade: f64,
    pub base_multiplier: f64,
    pub low_rating_threshold: f64,
    pub high_rating_threshold: f64,
    pub low_rating_volatility: f64,
    pub baseline_volatility: f64,
    pub high_rating_volatility: f64,
    pub resistance_distance: f64,
    pub resistance_factor: f64,
    pub hard_worker_gain: f64,
    pub lazy_loss: f64,
    pub consistent_loss: f64
}

impl ProgressionConfig {
    pub const DEFAULT: ProgressionConfig = ProgressionConfig {
        equilibrium_grade: EQUILIBRIUM_GRADE,
        base_multiplier: BASE_MULTIPLIER,
        low_rating_threshold: LOW_RATING_THRESHOLD,
        high_rating_threshold: HIGH_RATING_THRESHOLD,
        low_rating_volatility: LOW_RATING_VOLATILITY,
        baseline_volatility: BASELINE_VOLATILITY,
        high_rating_volatility: HIGH_RATING_VOLATILITY,
        resistance_distance: RESISTANCE_DISTANCE,
        resistance_factor: RESISTANCE_FACTOR,
        hard_worker_gain: HARD_WORKER_GAIN,
        lazy_loss: LAZY_LOSS,
        consistent_loss: CONSISTENT_LOSS
    };

    /// Rejects configurations the engine cannot honour: non-finite values,
    /// negative multipliers (which would break grade monotonicity) and
    /// inverted volatility thresholds.
    pub fn validate(&self) -> Result<(), ProcessorError> {
        let fields = [
            ("equilibrium_grade", self.equilibrium_grade),
            ("base_multiplier", self.base_multiplier),
            ("low_rating_threshold", self.low_rating_threshold),
            ("high_rating_threshold", self.high_rating_threshold),
            ("low_rating_volatility", self.low_rating_volatility),
            ("baseline_volatility", self.baseline_volatility),
            ("high_rating_volatility", self.high_rating_volatility),
            ("resistance_distance", self.resistance_distance),
            ("resistance_factor", self.resistance_factor),
            ("hard_worker_gain", self.hard_worker_gain),
            ("lazy_loss", self.lazy_loss),
            ("consistent_loss", self.consistent_loss)
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ProcessorError::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }

        let multipliers = [
            ("base_multiplier", self.base_multiplier),
            ("low_rating_volatility", self.low_rating_volatility),
            ("baseline_volatility", self.baseline_volatility),
            ("high_rating_volatility", self.high_rating_volatility),
            ("resistance_factor", self.resistance_factor),
            ("hard_worker_gain", self.hard_worker_gain),
            ("lazy_loss", self.lazy_loss),
            ("consistent_loss", self.consistent_loss)
        ];

        for (name, value) in multipliers {
            if value < 0.0 {
                return Err(ProcessorError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.low_rating_threshold > self.high_rating_threshold {
            return Err(ProcessorError::InvalidConfig(format!(
                "low_rating_threshold ({}) exceeds high_rating_threshold ({})",
                self.low_rating_threshold, self.high_rating_threshold
            )));
        }

        Ok(())
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
