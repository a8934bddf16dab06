//! Bet definitions, metadata, and win evaluation
//!
//! Split into focused modules following the same layout as the rest of
//! the engine:
//! - `types.rs` - bet type enum, placed bets, evaluation results
//! - `catalog.rs` - static odds, probability, and coverage tables
//! - `resolution.rs` - pure win/loss evaluation against a spin result

pub mod catalog;
pub mod resolution;
pub mod types;

pub use catalog::{coverage_for, describe, odds_for, probability_for, probability_label, BetInfo};
pub use resolution::{evaluate, evaluate_all, total_payout};
pub use types::{BetEvaluation, BetType, PlacedBet};
