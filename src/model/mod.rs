//! Rating progression for squad players.
//!
//! [`progression`] holds the engine: a pure function from a player's rating state
//! and one match performance to their new rating. [`matchday`] and
//! [`rating_tracker`] are the caller side that feeds it and stores its results.
pub mod constants;
pub mod matchday;
pub mod progression;
pub mod rating_tracker;
pub mod rating_utils;
pub mod structures;

pub use progression::{progress_rating, progress_rating_with};
