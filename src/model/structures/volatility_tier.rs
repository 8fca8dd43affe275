use serde_repr::{Deserialize_repr, Serialize_repr};
use strum_macros::{Display, EnumIter};

use crate::model::constants::ProgressionConfig;

/// How hard a match swings a player's rating, chosen from their current rating.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum VolatilityTier {
    Developing = 0,
    Established = 1,
    Elite = 2
}

impl VolatilityTier {
    /// Both thresholds are exclusive: a rating sitting exactly on one is `Established`.
    pub fn for_rating(rating: f64, config: &ProgressionConfig) -> VolatilityTier {
        if rating < config.low_rating_threshold {
            VolatilityTier::Developing
        } else if rating > config.high_rating_threshold {
            VolatilityTier::Elite
        } else {
            VolatilityTier::Established
        }
    }

    pub fn multiplier(self, config: &ProgressionConfig) -> f64 {
        match self {
            VolatilityTier::Developing => config.low_rating_volatility,
            VolatilityTier::Established => config.baseline_volatility,
            VolatilityTier::Elite => config.high_rating_volatility
        }
    }
}
