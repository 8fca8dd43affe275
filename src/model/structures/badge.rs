use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::model::constants::ProgressionConfig;

/// Modifier badges a player can hold.
///
/// Declaration order is the canonical order in which effects are composed;
/// the derived `Ord` follows it, so a `BTreeSet<Badge>` iterates canonically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Badge {
    /// Hard worker: gains are amplified.
    Trabalhador,
    /// Lazy: losses are amplified.
    #[strum(serialize = "Preguiçoso")]
    #[serde(rename = "Preguiçoso")]
    Preguicoso,
    /// Consistent: losses are dampened.
    Consistente
}

impl Badge {
    /// Passes the running delta through this badge's effect.
    pub fn apply(self, delta: f64, config: &ProgressionConfig) -> f64 {
        match self {
            Badge::Trabalhador if delta > 0.0 => delta * config.hard_worker_gain,
            Badge::Preguicoso if delta < 0.0 => delta * config.lazy_loss,
            Badge::Consistente if delta < 0.0 => delta * config.consistent_loss,
            _ => delta
        }
    }

    /// Resolves raw identifiers into the distinct, recognised badges in canonical order.
    /// Unknown identifiers are dropped.
    pub fn resolve<S: AsRef<str>>(identifiers: &[S]) -> BTreeSet<Badge> {
        identifiers
            .iter()
            .filter_map(|id| Badge::from_str(id.as_ref()).ok())
            .collect()
    }

    /// Identifiers in `identifiers` that do not name a badge.
    pub fn unrecognised<S: AsRef<str>>(identifiers: &[S]) -> Vec<&str> {
        identifiers
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| Badge::from_str(id).is_err())
            .collect()
    }
}
