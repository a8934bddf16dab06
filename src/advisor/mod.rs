//! Heuristic strategy advisor over recent spin history
//!
//! Everything here is explanatory commentary, not prediction: spins are
//! independent and the advisor says so in every output. Bias detection
//! is a fixed first-match-wins rule chain over simple category tallies;
//! the priority order and thresholds are table behavior and must not be
//! reordered even where a different order would look tidier.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::betting::{odds_for, probability_label, BetType, PlacedBet};
use crate::wheel::{Color, Pocket};

/// Minimum history length before any pattern is reported
pub const MIN_HISTORY: usize = 3;

/// Bias threshold for color, parity, and range categories
pub const OUTSIDE_BIAS_THRESHOLD: f64 = 0.70;

/// Bias threshold for dozens, lower to reflect their smaller baseline
/// share (12/37 instead of 18/37)
pub const DOZEN_BIAS_THRESHOLD: f64 = 0.50;

/// Appended to every advisory output
pub const DISCLAIMER: &str =
    "Remember: every spin is independent, and past results never change the odds.";

/// Per-category counts over a history window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTally {
    pub red: usize,
    pub black: usize,
    pub odd: usize,
    pub even: usize,
    pub low: usize,
    pub high: usize,
    pub dozen1: usize,
    pub dozen2: usize,
    pub dozen3: usize,
    pub zeros: usize,
    pub total: usize,
}

/// Pattern detected in recent history, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternLabel {
    RedBias,
    BlackBias,
    OddBias,
    EvenBias,
    LowBias,
    HighBias,
    /// Dozen index 1-3
    DozenBias(u8),
    ZeroPresence,
    None,
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternLabel::RedBias => write!(f, "red streak"),
            PatternLabel::BlackBias => write!(f, "black streak"),
            PatternLabel::OddBias => write!(f, "odd streak"),
            PatternLabel::EvenBias => write!(f, "even streak"),
            PatternLabel::LowBias => write!(f, "low-range streak"),
            PatternLabel::HighBias => write!(f, "high-range streak"),
            PatternLabel::DozenBias(d) => write!(f, "dozen {} streak", d),
            PatternLabel::ZeroPresence => write!(f, "zero appeared"),
            PatternLabel::None => write!(f, "no pattern"),
        }
    }
}

/// A bet the advisor suggests, with its one-line rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedBet {
    pub bet_type: BetType,
    pub reference: Option<Pocket>,
    pub reasoning: String,
}

/// Canned advice for a selected bet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub explanation: String,
    pub suggested_bets: Vec<SuggestedBet>,
}

/// History-driven strategy output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyAdvice {
    pub strategy: String,
    pub explanation: String,
    pub suggested_bets: Vec<SuggestedBet>,
    /// The pattern the advice is based on, for callers that branch on it
    pub pattern: PatternLabel,
}

/// Tally a history window into per-category counts.
///
/// The window is whatever the caller passes, typically the last 5-15
/// spins, most recent first. Order does not affect the tally.
pub fn classify(history: &[Pocket]) -> SpinTally {
    let mut tally = SpinTally::default();
    for pocket in history {
        let n = pocket.value();
        tally.total += 1;
        if n == 0 {
            tally.zeros += 1;
            continue;
        }
        match pocket.color() {
            Color::Red => tally.red += 1,
            Color::Black => tally.black += 1,
            Color::Green => {}
        }
        if n % 2 == 1 {
            tally.odd += 1;
        } else {
            tally.even += 1;
        }
        if n <= 18 {
            tally.low += 1;
        } else {
            tally.high += 1;
        }
        match n {
            1..=12 => tally.dozen1 += 1,
            13..=24 => tally.dozen2 += 1,
            _ => tally.dozen3 += 1,
        }
    }
    tally
}

/// How often each number appears in the window
pub fn number_frequencies(history: &[Pocket]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for pocket in history {
        *counts.entry(pocket.value()).or_insert(0) += 1;
    }
    counts
}

/// The most frequent number in the window, ties broken by lower number
pub fn hot_number(history: &[Pocket]) -> Option<(Pocket, usize)> {
    let counts = number_frequencies(history);
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(n, count)| (Pocket::new_unchecked(n), count))
}

/// Detect a bias in the tally, first match wins.
///
/// The chain runs color > parity > range > dozen > zero presence and
/// stops at the first category over its threshold. Short windows
/// (fewer than [`MIN_HISTORY`] spins) never report a pattern.
pub fn detect_bias(tally: &SpinTally) -> PatternLabel {
    if tally.total < MIN_HISTORY {
        return PatternLabel::None;
    }
    let total = tally.total as f64;
    let over = |count: usize, threshold: f64| count as f64 / total >= threshold;

    let pattern = if over(tally.red, OUTSIDE_BIAS_THRESHOLD) {
        PatternLabel::RedBias
    } else if over(tally.black, OUTSIDE_BIAS_THRESHOLD) {
        PatternLabel::BlackBias
    } else if over(tally.odd, OUTSIDE_BIAS_THRESHOLD) {
        PatternLabel::OddBias
    } else if over(tally.even, OUTSIDE_BIAS_THRESHOLD) {
        PatternLabel::EvenBias
    } else if over(tally.low, OUTSIDE_BIAS_THRESHOLD) {
        PatternLabel::LowBias
    } else if over(tally.high, OUTSIDE_BIAS_THRESHOLD) {
        PatternLabel::HighBias
    } else if over(tally.dozen1, DOZEN_BIAS_THRESHOLD) {
        PatternLabel::DozenBias(1)
    } else if over(tally.dozen2, DOZEN_BIAS_THRESHOLD) {
        PatternLabel::DozenBias(2)
    } else if over(tally.dozen3, DOZEN_BIAS_THRESHOLD) {
        PatternLabel::DozenBias(3)
    } else if tally.zeros > 0 {
        PatternLabel::ZeroPresence
    } else {
        PatternLabel::None
    };
    debug!(total = tally.total, %pattern, "bias detection");
    pattern
}

/// Canned advice for the bet a player has selected, parameterized with
/// catalog odds and probabilities. `None` yields general guidance.
pub fn recommend(selected: Option<&PlacedBet>) -> Recommendation {
    let (action, body) = match selected.map(|bet| bet.bet_type) {
        Some(BetType::Straight) => (
            "High risk, high reward",
            format!(
                "A straight-up number pays {}:1 but hits only {} of spins. \
                 Keep stakes small and expect long dry stretches.",
                odds_for(BetType::Straight),
                probability_label(BetType::Straight)
            ),
        ),
        Some(
            bet_type @ (BetType::Red
            | BetType::Black
            | BetType::Odd
            | BetType::Even
            | BetType::Low
            | BetType::High),
        ) => (
            "Steady play",
            format!(
                "{} is an even-money bet winning {} of spins. \
                 The closest thing to a coin flip the table offers.",
                capitalize(bet_type.name()),
                probability_label(bet_type)
            ),
        ),
        Some(bet_type @ (BetType::Dozen1 | BetType::Dozen2 | BetType::Dozen3)) => (
            "Moderate risk",
            format!(
                "A dozen covers 12 numbers, wins {} of spins, and pays {}:1. \
                 A middle ground between even-money and inside bets.",
                probability_label(bet_type),
                odds_for(bet_type)
            ),
        ),
        Some(BetType::Split) => (
            "Sharp inside play",
            format!(
                "A split covers 2 adjacent numbers at {}:1, winning {} of spins.",
                odds_for(BetType::Split),
                probability_label(BetType::Split)
            ),
        ),
        Some(BetType::Street) => (
            "Row coverage",
            format!(
                "A street covers a full row of 3 at {}:1, winning {} of spins.",
                odds_for(BetType::Street),
                probability_label(BetType::Street)
            ),
        ),
        Some(BetType::Corner) => (
            "Block coverage",
            format!(
                "A corner covers 4 numbers at {}:1, winning {} of spins.",
                odds_for(BetType::Corner),
                probability_label(BetType::Corner)
            ),
        ),
        Some(BetType::SixLine) => (
            "Double-row coverage",
            format!(
                "A six line covers 6 numbers at {}:1, winning {} of spins.",
                odds_for(BetType::SixLine),
                probability_label(BetType::SixLine)
            ),
        ),
        Some(BetType::Neighbors) => {
            let anchor = selected
                .and_then(|bet| bet.reference)
                .map(|p| p.to_string())
                .unwrap_or_else(|| "your number".to_string());
            (
                "Wheel-section coverage",
                format!(
                    "Neighbors covers {} plus the two pockets on each side of it \
                     on the physical wheel, paying a flat {}:1 on any of the five.",
                    anchor,
                    odds_for(BetType::Neighbors)
                ),
            )
        }
        None => (
            "Start simple",
            "Even-money outside bets (red/black, odd/even, low/high) keep \
             variance low while you learn the table."
                .to_string(),
        ),
    };
    Recommendation {
        action: action.to_string(),
        explanation: format!("{} {}", body, DISCLAIMER),
        suggested_bets: Vec::new(),
    }
}

/// Combine bias detection with a fixed pattern-to-bets mapping.
///
/// Each detected streak yields a "balance" bet against the trend and a
/// "follow" bet riding it; a zero in the window suggests zero coverage;
/// no pattern falls back to a generic balanced spread. Empty history is
/// handled by the same fallback, never an error.
pub fn strategy_recommendation(history: &[Pocket]) -> StrategyAdvice {
    let tally = classify(history);
    let pattern = detect_bias(&tally);

    let advice = match pattern {
        PatternLabel::RedBias => streak_advice(
            pattern,
            "Red streak",
            format!("Red hit {} of the last {} spins.", tally.red, tally.total),
            BetType::Black,
            BetType::Red,
        ),
        PatternLabel::BlackBias => streak_advice(
            pattern,
            "Black streak",
            format!("Black hit {} of the last {} spins.", tally.black, tally.total),
            BetType::Red,
            BetType::Black,
        ),
        PatternLabel::OddBias => streak_advice(
            pattern,
            "Odd streak",
            format!("Odd numbers hit {} of the last {} spins.", tally.odd, tally.total),
            BetType::Even,
            BetType::Odd,
        ),
        PatternLabel::EvenBias => streak_advice(
            pattern,
            "Even streak",
            format!(
                "Even numbers hit {} of the last {} spins.",
                tally.even, tally.total
            ),
            BetType::Odd,
            BetType::Even,
        ),
        PatternLabel::LowBias => streak_advice(
            pattern,
            "Low-range streak",
            format!(
                "Numbers 1-18 hit {} of the last {} spins.",
                tally.low, tally.total
            ),
            BetType::High,
            BetType::Low,
        ),
        PatternLabel::HighBias => streak_advice(
            pattern,
            "High-range streak",
            format!(
                "Numbers 19-36 hit {} of the last {} spins.",
                tally.high, tally.total
            ),
            BetType::Low,
            BetType::High,
        ),
        PatternLabel::DozenBias(dozen) => dozen_advice(&tally, dozen),
        PatternLabel::ZeroPresence => StrategyAdvice {
            strategy: "Cover the zero".to_string(),
            explanation: format!(
                "Zero appeared {} time(s) in the last {} spins. {}",
                tally.zeros, tally.total, DISCLAIMER
            ),
            suggested_bets: vec![
                SuggestedBet {
                    bet_type: BetType::Straight,
                    reference: Some(Pocket::ZERO),
                    reasoning: "Direct zero coverage at 35:1.".to_string(),
                },
                SuggestedBet {
                    bet_type: BetType::Neighbors,
                    reference: Some(Pocket::ZERO),
                    reasoning: "Covers zero and its wheel section.".to_string(),
                },
            ],
            pattern,
        },
        PatternLabel::None => balanced_fallback(history, pattern),
    };
    debug!(
        strategy = %advice.strategy,
        suggestions = advice.suggested_bets.len(),
        "strategy recommendation"
    );
    advice
}

fn streak_advice(
    pattern: PatternLabel,
    strategy: &str,
    observation: String,
    balance: BetType,
    follow: BetType,
) -> StrategyAdvice {
    StrategyAdvice {
        strategy: strategy.to_string(),
        explanation: format!(
            "{} Streaks carry no predictive weight. {}",
            observation, DISCLAIMER
        ),
        suggested_bets: vec![
            SuggestedBet {
                bet_type: balance,
                reference: None,
                reasoning: format!("Balance: bet {} against the streak.", balance),
            },
            SuggestedBet {
                bet_type: follow,
                reference: None,
                reasoning: format!("Follow: ride the {} streak.", follow),
            },
        ],
        pattern,
    }
}

fn dozen_advice(tally: &SpinTally, dozen: u8) -> StrategyAdvice {
    let count = match dozen {
        1 => tally.dozen1,
        2 => tally.dozen2,
        _ => tally.dozen3,
    };
    let hot = dozen_bet(dozen);
    let others: Vec<BetType> = [1u8, 2, 3]
        .iter()
        .filter(|&&d| d != dozen)
        .map(|&d| dozen_bet(d))
        .collect();
    let mut suggested: Vec<SuggestedBet> = others
        .into_iter()
        .map(|bet_type| SuggestedBet {
            bet_type,
            reference: None,
            reasoning: format!("Balance: spread onto the {}.", bet_type),
        })
        .collect();
    suggested.push(SuggestedBet {
        bet_type: hot,
        reference: None,
        reasoning: format!("Follow: ride the {} streak.", hot),
    });
    StrategyAdvice {
        strategy: format!("Dozen {} streak", dozen),
        explanation: format!(
            "The {} hit {} of the last {} spins. {}",
            hot, count, tally.total, DISCLAIMER
        ),
        suggested_bets: suggested,
        pattern: PatternLabel::DozenBias(dozen),
    }
}

fn dozen_bet(dozen: u8) -> BetType {
    match dozen {
        1 => BetType::Dozen1,
        2 => BetType::Dozen2,
        _ => BetType::Dozen3,
    }
}

fn balanced_fallback(history: &[Pocket], pattern: PatternLabel) -> StrategyAdvice {
    let observation = match hot_number(history) {
        Some((number, count)) if count > 1 => format!(
            "No category bias in the last {} spins; {} came up most often ({} times).",
            history.len(),
            number,
            count
        ),
        _ => "No pattern in recent spins.".to_string(),
    };
    StrategyAdvice {
        strategy: "Balanced play".to_string(),
        explanation: format!("{} {}", observation, DISCLAIMER),
        suggested_bets: vec![
            SuggestedBet {
                bet_type: BetType::Red,
                reference: None,
                reasoning: "Even-money bet, lowest variance.".to_string(),
            },
            SuggestedBet {
                bet_type: BetType::Dozen2,
                reference: None,
                reasoning: "Middle-dozen coverage at 2:1.".to_string(),
            },
        ],
        pattern,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(values: &[u8]) -> Vec<Pocket> {
        values.iter().map(|&n| Pocket::new_unchecked(n)).collect()
    }

    #[test]
    fn test_classify_counts_categories() {
        let tally = classify(&history(&[1, 2, 0, 19, 24]));
        assert_eq!(tally.total, 5);
        assert_eq!(tally.zeros, 1);
        assert_eq!(tally.red, 2); // 1 and 19
        assert_eq!(tally.black, 2); // 2 and 24
        assert_eq!(tally.odd, 2);
        assert_eq!(tally.even, 2);
        assert_eq!(tally.low, 2);
        assert_eq!(tally.high, 2);
        assert_eq!(tally.dozen1, 2);
        assert_eq!(tally.dozen2, 2);
        assert_eq!(tally.dozen3, 0);
    }

    #[test]
    fn test_short_history_reports_nothing() {
        assert_eq!(detect_bias(&classify(&[])), PatternLabel::None);
        assert_eq!(
            detect_bias(&classify(&history(&[1, 1]))),
            PatternLabel::None
        );
    }

    #[test]
    fn test_color_beats_parity_in_priority() {
        // all red and all odd: color check runs first and wins
        let tally = classify(&history(&[1, 3, 5, 7, 9]));
        assert_eq!(detect_bias(&tally), PatternLabel::RedBias);
    }

    #[test]
    fn test_parity_bias_without_color_bias() {
        // all odd, but colors mixed (1 and 9 red; 11, 13, 33 black),
        // so the color checks fall through to parity
        let tally = classify(&history(&[1, 9, 11, 13, 33]));
        assert_eq!(detect_bias(&tally), PatternLabel::OddBias);
    }

    #[test]
    fn test_dozen_threshold_is_half() {
        // 3 of 6 in the second dozen triggers at exactly 0.50
        let tally = classify(&history(&[14, 17, 20, 1, 26, 32]));
        assert_eq!(detect_bias(&tally), PatternLabel::DozenBias(2));
        // 3 of 7 does not
        let tally = classify(&history(&[14, 17, 20, 1, 26, 32, 4]));
        assert_ne!(detect_bias(&tally), PatternLabel::DozenBias(2));
    }

    #[test]
    fn test_zero_presence_is_last_resort() {
        // colors, parities, ranges, and dozens all balanced; only the
        // zero is left to report
        let tally = classify(&history(&[0, 1, 2, 19, 24]));
        assert_eq!(detect_bias(&tally), PatternLabel::ZeroPresence);
    }

    #[test]
    fn test_recommend_contains_disclaimer_and_numbers() {
        let straight = PlacedBet::new(
            1,
            BetType::Straight,
            Some(Pocket::new_unchecked(17)),
            10,
        )
        .unwrap();
        let rec = recommend(Some(&straight));
        assert!(rec.explanation.contains("35:1"));
        assert!(rec.explanation.contains(DISCLAIMER));

        let neighbors = PlacedBet::new(
            2,
            BetType::Neighbors,
            Some(Pocket::new_unchecked(12)),
            10,
        )
        .unwrap();
        let rec = recommend(Some(&neighbors));
        assert!(rec.explanation.contains("12"));

        let rec = recommend(None);
        assert!(rec.explanation.contains(DISCLAIMER));
    }

    #[test]
    fn test_strategy_zero_suggestions() {
        let advice = strategy_recommendation(&history(&[0, 1, 2, 19, 24]));
        assert_eq!(advice.pattern, PatternLabel::ZeroPresence);
        let types: Vec<BetType> =
            advice.suggested_bets.iter().map(|s| s.bet_type).collect();
        assert!(types.contains(&BetType::Straight));
        assert!(types.contains(&BetType::Neighbors));
        assert!(advice
            .suggested_bets
            .iter()
            .all(|s| s.reference == Some(Pocket::ZERO)));
    }

    #[test]
    fn test_strategy_fallback_on_empty_history() {
        let advice = strategy_recommendation(&[]);
        assert_eq!(advice.pattern, PatternLabel::None);
        assert_eq!(advice.strategy, "Balanced play");
        assert!(!advice.suggested_bets.is_empty());
        assert!(advice.explanation.contains(DISCLAIMER));
    }

    #[test]
    fn test_hot_number() {
        assert_eq!(hot_number(&[]), None);
        let (number, count) = hot_number(&history(&[5, 9, 5, 17, 5])).unwrap();
        assert_eq!(number.value(), 5);
        assert_eq!(count, 3);
        // tie broken by lower number
        let (number, _) = hot_number(&history(&[9, 5])).unwrap();
        assert_eq!(number.value(), 5);
    }
}
