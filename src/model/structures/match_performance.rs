use serde::{Deserialize, Serialize};

/// One player's outcome for one simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchPerformance {
    /// Conventionally 0 to 10. Not clamped.
    pub phase_grade: f64
}

impl MatchPerformance {
    pub fn new(phase_grade: f64) -> MatchPerformance {
        MatchPerformance { phase_grade }
    }
}
