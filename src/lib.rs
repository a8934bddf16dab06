//! Roulette Engine - deterministic European roulette core
//!
//! Feynman Explanation: this crate is the "croupier's rulebook" for a
//! roulette table, with the table itself left out. Each module is a
//! different page of that rulebook:
//! - wheel: where every pocket sits, on the rim and on the board
//! - betting: what each bet means, what it pays, and who won
//! - advisor: the pit boss's commentary on recent spins
//!
//! Everything is a pure, synchronous function over static topology
//! data. The engine never spins the wheel, never touches a bankroll,
//! and never does I/O; the surrounding game loop supplies placed bets
//! and spin results and consumes evaluations and recommendations.
//! Calls are referentially transparent and safe to make concurrently.

pub mod advisor;
pub mod betting;
pub mod error;
pub mod wheel;

// Re-export commonly used types for easy access
pub use advisor::{
    classify, detect_bias, hot_number, number_frequencies, recommend,
    strategy_recommendation, PatternLabel, Recommendation, SpinTally, StrategyAdvice,
    SuggestedBet, DISCLAIMER, DOZEN_BIAS_THRESHOLD, MIN_HISTORY, OUTSIDE_BIAS_THRESHOLD,
};
pub use betting::{
    coverage_for, describe, evaluate, evaluate_all, odds_for, probability_for,
    probability_label, total_payout, BetEvaluation, BetInfo, BetType, PlacedBet,
};
pub use error::{Error, Result};
pub use wheel::{
    all_pockets, board_neighbors_corner, board_neighbors_split, board_row,
    board_six_line, color_of, is_red, wheel_neighbors, Color, Pocket, POCKET_COUNT,
    RED_NUMBERS, WHEEL_ORDER,
};
