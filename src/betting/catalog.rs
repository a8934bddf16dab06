//! Static odds, probability, and coverage tables for every bet type
//!
//! All values are fixed table constants. Probabilities are informational
//! and assume 37 equally likely pockets; they always stay consistent
//! with the coverage implied by the odds table.

use serde::{Deserialize, Serialize};

use super::types::BetType;
use crate::wheel::Pocket;

/// Payout multiplier for a winning bet of this type.
///
/// The neighbors bet covers 5 pockets but pays a flat 7:1. That is not
/// the fair multiplier for 5-number coverage (and real tables structure
/// neighbor bets as five separate unit bets); the flat figure is kept
/// deliberately as table behavior, and the deviation is pinned in tests.
pub fn odds_for(bet_type: BetType) -> u64 {
    match bet_type {
        BetType::Red
        | BetType::Black
        | BetType::Odd
        | BetType::Even
        | BetType::Low
        | BetType::High => 1,
        BetType::Dozen1 | BetType::Dozen2 | BetType::Dozen3 => 2,
        BetType::Straight => 35,
        BetType::Split => 17,
        BetType::Street => 11,
        BetType::Corner => 8,
        BetType::SixLine => 5,
        BetType::Neighbors => 7,
    }
}

/// Number of pockets a winning result can land in for this bet type
pub fn coverage_for(bet_type: BetType) -> u64 {
    match bet_type {
        BetType::Red
        | BetType::Black
        | BetType::Odd
        | BetType::Even
        | BetType::Low
        | BetType::High => 18,
        BetType::Dozen1 | BetType::Dozen2 | BetType::Dozen3 => 12,
        BetType::Straight => 1,
        BetType::Split => 2,
        BetType::Street => 3,
        BetType::Corner => 4,
        BetType::SixLine => 6,
        BetType::Neighbors => 5,
    }
}

/// Win probability in percent, `coverage / 37 * 100`
pub fn probability_for(bet_type: BetType) -> f64 {
    coverage_for(bet_type) as f64 / 37.0 * 100.0
}

/// Win probability formatted for display, e.g. `"48.6%"`
pub fn probability_label(bet_type: BetType) -> String {
    format!("{:.1}%", probability_for(bet_type))
}

/// Human-readable detail bundle for one bet type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetInfo {
    pub description: String,
    pub coverage: u64,
    /// Payout multiplier, quoted as `odds`:1
    pub odds: u64,
    pub probability: String,
}

/// Describe a bet type, folding in the reference number where it
/// changes what the bet actually covers
pub fn describe(bet_type: BetType, reference: Option<Pocket>) -> BetInfo {
    let coverage = coverage_for(bet_type);
    let odds = odds_for(bet_type);
    let base = match (bet_type, reference) {
        (BetType::Red, _) => "Any red number".to_string(),
        (BetType::Black, _) => "Any black number".to_string(),
        (BetType::Odd, _) => "Any odd number".to_string(),
        (BetType::Even, _) => "Any even number (zero loses)".to_string(),
        (BetType::Low, _) => "Any number from 1 to 18".to_string(),
        (BetType::High, _) => "Any number from 19 to 36".to_string(),
        (BetType::Dozen1, _) => "First dozen, 1 to 12".to_string(),
        (BetType::Dozen2, _) => "Second dozen, 13 to 24".to_string(),
        (BetType::Dozen3, _) => "Third dozen, 25 to 36".to_string(),
        (BetType::Straight, Some(n)) => format!("Single number {}", n),
        (BetType::Straight, None) => "Single number".to_string(),
        (BetType::Split, Some(n)) => {
            format!("Two numbers adjacent to {} on the board", n)
        }
        (BetType::Split, None) => "Two adjacent numbers".to_string(),
        (BetType::Street, Some(n)) => format!("The row of three containing {}", n),
        (BetType::Street, None) => "A row of three numbers".to_string(),
        (BetType::Corner, Some(n)) => format!("The 2x2 block anchored at {}", n),
        (BetType::Corner, None) => "A block of four numbers".to_string(),
        (BetType::SixLine, Some(n)) => {
            format!("Two rows of three starting at {}'s row", n)
        }
        (BetType::SixLine, None) => "Two adjacent rows, six numbers".to_string(),
        (BetType::Neighbors, Some(n)) => {
            format!("{} and its two wheel neighbors on each side", n)
        }
        (BetType::Neighbors, None) => {
            "A number and its two wheel neighbors on each side".to_string()
        }
    };
    BetInfo {
        description: format!(
            "{} ({} numbers, pays {}:1)",
            base, coverage, odds
        ),
        coverage,
        odds,
        probability: probability_label(bet_type),
    }
}
