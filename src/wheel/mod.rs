//! European wheel and board topology
//!
//! Single source of truth for every spatial relationship in the game:
//! pocket colors, the physical wheel sequence, and the 12x3 betting grid.
//! Split/corner/street/six-line coverage is derived from grid adjacency
//! here rather than hand-enumerated per bet, so the rest of the crate
//! never carries its own copy of the layout.
//!
//! Feynman: the wheel has two different "orders". The numeric order
//! (0, 1, 2, ...) is what the betting board shows; the wheel order is
//! where pockets physically sit on the rim. Neighbor bets care about the
//! second, everything else about the first.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of pockets on a European wheel (0-36)
pub const POCKET_COUNT: usize = 37;

/// Rows on the betting grid (1-3, 4-6, ..., 34-36)
pub const BOARD_ROWS: u8 = 12;

/// Columns on the betting grid
pub const BOARD_COLS: u8 = 3;

/// Physical pocket sequence of the European wheel, clockwise from 0.
pub const WHEEL_ORDER: [u8; POCKET_COUNT] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10,
    5, 24, 16, 33, 1, 20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

/// The 18 red numbers; every other non-zero pocket is black.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Number-to-wheel-slot lookup, derived once from [`WHEEL_ORDER`].
static WHEEL_INDEX: Lazy<[u8; POCKET_COUNT]> = Lazy::new(|| {
    let mut index = [0u8; POCKET_COUNT];
    for (slot, &number) in WHEEL_ORDER.iter().enumerate() {
        index[number as usize] = slot as u8;
    }
    index
});

/// Pocket color on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
        }
    }
}

/// A single wheel pocket, validated to the range 0-36
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pocket(u8);

impl Pocket {
    /// Zero, the single green pocket
    pub const ZERO: Pocket = Pocket(0);

    /// Create a validated pocket
    pub fn new(value: u8) -> Result<Self> {
        if value as usize >= POCKET_COUNT {
            return Err(Error::InvalidPocket(value));
        }
        Ok(Pocket(value))
    }

    /// Create a pocket without validation, for static tables and tests
    /// where the value is known to be in range
    pub const fn new_unchecked(value: u8) -> Self {
        Pocket(value)
    }

    /// The numeric value of this pocket
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Color of this pocket
    pub fn color(&self) -> Color {
        color_of(*self)
    }

    /// Index of this pocket in the physical wheel sequence
    pub fn wheel_position(&self) -> usize {
        WHEEL_INDEX[self.0 as usize] as usize
    }

    /// Position on the betting grid as `(row, col)`, row 0-11 top to
    /// bottom and col 0-2; `None` for 0, which sits outside the grid
    pub fn board_position(&self) -> Option<(u8, u8)> {
        if self.0 == 0 {
            return None;
        }
        let cell = self.0 - 1;
        Some((cell / BOARD_COLS, cell % BOARD_COLS))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Pocket {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Pocket::new(value)
    }
}

impl From<Pocket> for u8 {
    fn from(pocket: Pocket) -> u8 {
        pocket.0
    }
}

/// Whether a number belongs to the fixed red set
pub const fn is_red(number: u8) -> bool {
    matches!(
        number,
        1 | 3 | 5 | 7 | 9 | 12 | 14 | 16 | 18 | 19 | 21 | 23 | 25 | 27 | 30 | 32 | 34 | 36
    )
}

/// Color of a pocket: 0 is green, the red set is red, everything else black
pub fn color_of(pocket: Pocket) -> Color {
    let n = pocket.value();
    if n == 0 {
        Color::Green
    } else if is_red(n) {
        Color::Red
    } else {
        Color::Black
    }
}

/// The `radius` pockets on either side of `pocket` in wheel order.
///
/// Returns `2 * radius` pockets, wrapping circularly, never including
/// `pocket` itself. Nearest-before pockets come first, then the pockets
/// after, both nearest-first. A radius above 18 is clamped to 18 per
/// side (the whole rest of the wheel); the result then holds all 36
/// other pockets exactly once.
pub fn wheel_neighbors(pocket: Pocket, radius: usize) -> Vec<Pocket> {
    let slot = pocket.wheel_position();
    let mut neighbors = Vec::with_capacity(radius * 2);
    for step in 1..=radius.min(POCKET_COUNT / 2) {
        let before = (slot + POCKET_COUNT - step) % POCKET_COUNT;
        neighbors.push(Pocket(WHEEL_ORDER[before]));
    }
    for step in 1..=radius.min(POCKET_COUNT / 2) {
        let after = (slot + step) % POCKET_COUNT;
        neighbors.push(Pocket(WHEEL_ORDER[after]));
    }
    neighbors
}

/// The pocket at a betting-grid cell
fn grid_number(row: u8, col: u8) -> Pocket {
    Pocket(1 + row * BOARD_COLS + col)
}

/// All 2-number split combinations adjacent to `pocket` on the grid:
/// the cell to its right and the cell below, whichever exist. Zero has
/// no grid cell and yields no splits.
pub fn board_neighbors_split(pocket: Pocket) -> Vec<[Pocket; 2]> {
    let Some((row, col)) = pocket.board_position() else {
        return Vec::new();
    };
    let mut splits = Vec::with_capacity(2);
    if col + 1 < BOARD_COLS {
        splits.push([pocket, grid_number(row, col + 1)]);
    }
    if row + 1 < BOARD_ROWS {
        splits.push([pocket, grid_number(row + 1, col)]);
    }
    splits
}

/// The single 2x2 corner block anchored at `pocket` going right and
/// down, if the cell is not in the last row or column; otherwise empty.
pub fn board_neighbors_corner(pocket: Pocket) -> Vec<[Pocket; 4]> {
    let Some((row, col)) = pocket.board_position() else {
        return Vec::new();
    };
    if col + 1 >= BOARD_COLS || row + 1 >= BOARD_ROWS {
        return Vec::new();
    }
    vec![[
        pocket,
        grid_number(row, col + 1),
        grid_number(row + 1, col),
        grid_number(row + 1, col + 1),
    ]]
}

/// The full grid row ("street") containing `pocket`; empty for 0.
pub fn board_row(pocket: Pocket) -> Vec<Pocket> {
    let Some((row, _)) = pocket.board_position() else {
        return Vec::new();
    };
    (0..BOARD_COLS).map(|col| grid_number(row, col)).collect()
}

/// The six-line covering `pocket`'s row plus the row below; empty when
/// `pocket` is 0 or sits in the last row.
pub fn board_six_line(pocket: Pocket) -> Vec<Pocket> {
    let Some((row, _)) = pocket.board_position() else {
        return Vec::new();
    };
    if row + 1 >= BOARD_ROWS {
        return Vec::new();
    }
    let mut numbers = board_row(pocket);
    numbers.extend((0..BOARD_COLS).map(|col| grid_number(row + 1, col)));
    numbers
}

/// All 37 pockets in numeric order
pub fn all_pockets() -> impl Iterator<Item = Pocket> {
    (0..POCKET_COUNT as u8).map(Pocket)
}
