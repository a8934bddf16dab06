//! Pure win/loss evaluation of placed bets against spin results
//!
//! Evaluation is a total function: every `(bet, result)` pair yields a
//! `BetEvaluation`, never a panic or an error. A bet whose type needs a
//! reference number but carries none simply loses.

use tracing::trace;

use super::catalog::odds_for;
use super::types::{BetEvaluation, BetType, PlacedBet};
use crate::wheel::{
    board_neighbors_corner, board_neighbors_split, board_row, board_six_line,
    wheel_neighbors, Color, Pocket,
};

/// Wheel-order radius covered by a neighbors bet on each side
const NEIGHBORS_RADIUS: usize = 2;

/// Evaluate one bet against one spin result.
///
/// Payout on a win is `amount * odds`; on a loss it is zero. Stake
/// return and bankroll debits belong to the caller.
pub fn evaluate(bet: &PlacedBet, result: Pocket) -> BetEvaluation {
    let won = wins(bet.bet_type, bet.reference, result);
    // saturate rather than wrap: absurd stakes still evaluate
    let payout = if won {
        bet.amount.saturating_mul(odds_for(bet.bet_type))
    } else {
        0
    };
    trace!(
        bet_id = bet.id,
        bet_type = %bet.bet_type,
        result = result.value(),
        won,
        payout,
        "evaluated bet"
    );
    BetEvaluation {
        bet: *bet,
        won,
        payout,
    }
}

/// Evaluate every bet in a slice against the same spin result
pub fn evaluate_all(bets: &[PlacedBet], result: Pocket) -> Vec<BetEvaluation> {
    bets.iter().map(|bet| evaluate(bet, result)).collect()
}

/// Sum of winning payouts across a set of evaluations
pub fn total_payout(evaluations: &[BetEvaluation]) -> u64 {
    evaluations.iter().map(|e| e.payout).sum()
}

fn wins(bet_type: BetType, reference: Option<Pocket>, result: Pocket) -> bool {
    let n = result.value();
    match bet_type {
        // Outside bets: zero matches none of these
        BetType::Red => result.color() == Color::Red,
        BetType::Black => result.color() == Color::Black,
        BetType::Odd => n != 0 && n % 2 == 1,
        BetType::Even => n != 0 && n % 2 == 0,
        BetType::Low => (1..=18).contains(&n),
        BetType::High => (19..=36).contains(&n),
        BetType::Dozen1 => (1..=12).contains(&n),
        BetType::Dozen2 => (13..=24).contains(&n),
        BetType::Dozen3 => (25..=36).contains(&n),

        // Inside bets lose when the reference is missing
        BetType::Straight => reference == Some(result),
        BetType::Split => reference.is_some_and(|anchor| {
            board_neighbors_split(anchor)
                .iter()
                .any(|pair| pair.contains(&result))
        }),
        BetType::Street => {
            reference.is_some_and(|anchor| board_row(anchor).contains(&result))
        }
        BetType::Corner => reference.is_some_and(|anchor| {
            board_neighbors_corner(anchor)
                .iter()
                .any(|quad| quad.contains(&result))
        }),
        BetType::SixLine => {
            reference.is_some_and(|anchor| board_six_line(anchor).contains(&result))
        }
        BetType::Neighbors => reference.is_some_and(|anchor| {
            result == anchor || wheel_neighbors(anchor, NEIGHBORS_RADIUS).contains(&result)
        }),
    }
}
