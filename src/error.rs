//! Error types for the roulette engine
//!
//! Errors only appear at the construction boundary (pocket numbers, bet
//! stakes). The evaluation and advisory paths are total functions and
//! never return errors; invalid inputs there degrade to safe defaults.

use thiserror::Error;

use crate::betting::BetType;

/// Result type alias for roulette engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pocket number outside the European wheel range 0-36
    #[error("invalid pocket number {0}: expected 0-36")]
    InvalidPocket(u8),

    /// Bet stake must be a positive amount
    #[error("invalid bet amount: stake must be positive")]
    InvalidAmount,

    /// Bet type needs a reference number but none was supplied
    #[error("bet type {0} requires a reference number")]
    MissingReference(BetType),
}
