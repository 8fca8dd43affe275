pub mod badge;
pub mod match_performance;
pub mod player_rating_state;
pub mod player_record;
pub mod progression_result;
pub mod rating_history;
pub mod volatility_tier;
