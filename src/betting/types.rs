//! Bet type and bet lifecycle definitions
//!
//! This module contains the core data structures describing what a
//! player can wager on and what an evaluated wager looks like.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::wheel::Pocket;

/// Every way to bet on a European roulette table supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetType {
    // Even-money outside bets
    Red,
    Black,
    Odd,
    Even,
    /// Low numbers 1-18
    Low,
    /// High numbers 19-36
    High,

    // Dozen bets
    /// First dozen 1-12
    Dozen1,
    /// Second dozen 13-24
    Dozen2,
    /// Third dozen 25-36
    Dozen3,

    // Inside bets (all carry a reference number)
    /// Single number
    Straight,
    /// Two grid-adjacent numbers
    Split,
    /// A full grid row of three numbers
    Street,
    /// A 2x2 block of four numbers
    Corner,
    /// Two adjacent rows, six numbers
    SixLine,

    /// A number plus its two wheel neighbors on each side (five pockets)
    Neighbors,
}

impl BetType {
    /// All bet types, in declaration order
    pub const ALL: [BetType; 15] = [
        BetType::Red,
        BetType::Black,
        BetType::Odd,
        BetType::Even,
        BetType::Low,
        BetType::High,
        BetType::Dozen1,
        BetType::Dozen2,
        BetType::Dozen3,
        BetType::Straight,
        BetType::Split,
        BetType::Street,
        BetType::Corner,
        BetType::SixLine,
        BetType::Neighbors,
    ];

    /// Whether this bet type needs a reference number to be meaningful
    pub fn requires_reference(&self) -> bool {
        matches!(
            self,
            BetType::Straight
                | BetType::Split
                | BetType::Street
                | BetType::Corner
                | BetType::SixLine
                | BetType::Neighbors
        )
    }

    /// Short human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BetType::Red => "red",
            BetType::Black => "black",
            BetType::Odd => "odd",
            BetType::Even => "even",
            BetType::Low => "low (1-18)",
            BetType::High => "high (19-36)",
            BetType::Dozen1 => "1st dozen",
            BetType::Dozen2 => "2nd dozen",
            BetType::Dozen3 => "3rd dozen",
            BetType::Straight => "straight up",
            BetType::Split => "split",
            BetType::Street => "street",
            BetType::Corner => "corner",
            BetType::SixLine => "six line",
            BetType::Neighbors => "neighbors",
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wager placed by a player, immutable once constructed.
///
/// The engine never retains bets; the caller's game session owns them
/// and hands them in for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedBet {
    /// Caller-assigned identifier, unique within a session
    pub id: u64,
    pub bet_type: BetType,
    /// Wheel/board anchor for inside and neighbors bets
    pub reference: Option<Pocket>,
    /// Stake, always positive
    pub amount: u64,
}

impl PlacedBet {
    /// Create a bet, validating only the stake. A missing reference
    /// number is tolerated here and evaluates as a loss later.
    pub fn new(
        id: u64,
        bet_type: BetType,
        reference: Option<Pocket>,
        amount: u64,
    ) -> Result<Self> {
        if amount == 0 {
            return Err(Error::InvalidAmount);
        }
        Ok(PlacedBet {
            id,
            bet_type,
            reference,
            amount,
        })
    }

    /// Like [`PlacedBet::new`] but also rejects a missing reference for
    /// bet types that need one, for callers that prefer failing early
    /// over the evaluate-as-loss default.
    pub fn try_new_strict(
        id: u64,
        bet_type: BetType,
        reference: Option<Pocket>,
        amount: u64,
    ) -> Result<Self> {
        if bet_type.requires_reference() && reference.is_none() {
            return Err(Error::MissingReference(bet_type));
        }
        Self::new(id, bet_type, reference, amount)
    }
}

/// Outcome of evaluating one bet against one spin result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetEvaluation {
    pub bet: PlacedBet,
    pub won: bool,
    /// `amount * odds` on a win, zero on a loss. Stake return and
    /// bankroll accounting are the caller's concern.
    pub payout: u64,
}

impl BetEvaluation {
    pub fn is_win(&self) -> bool {
        self.won
    }

    /// Payout if this evaluation is a win
    pub fn winnings(&self) -> Option<u64> {
        if self.won {
            Some(self.payout)
        } else {
            None
        }
    }
}
