//! Reward wheel
//!
//! A spin lands on a cash wedge, "lose a turn", or "lose a turn and $1000".

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Where the wheel stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wedge {
    /// Dollar value paid per occurrence of a correct letter
    Cash(u32),
    /// Turn passes with no letter called
    LoseTurn,
    /// Turn passes and the player loses $1000 (never below $0)
    LoseTurnAndPenalty,
}

impl Wedge {
    /// Map a raw wheel value: positive is cash, zero loses the turn, negative is the penalty
    #[must_use]
    pub const fn from_value(value: i32) -> Self {
        match value {
            0 => Self::LoseTurn,
            v if v < 0 => Self::LoseTurnAndPenalty,
            v => Self::Cash(v as u32),
        }
    }

    /// Raw value as printed on the wheel
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Wheel values are far below i32::MAX
    pub const fn value(self) -> i32 {
        match self {
            Self::Cash(amount) => amount as i32,
            Self::LoseTurn => 0,
            Self::LoseTurnAndPenalty => -(super::ledger::PENALTY_AMOUNT as i32),
        }
    }
}

impl fmt::Display for Wedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash(amount) => write!(f, "${amount}"),
            Self::LoseTurn => f.write_str("Lose Your Turn"),
            Self::LoseTurnAndPenalty => f.write_str("Lose Your Turn and $1000"),
        }
    }
}

/// Raw values of the standard wheel
pub const STANDARD_WEDGES: [i32; 10] = [100, 300, 500, 700, 900, 2000, 3000, 5000, -1000, 0];

/// Anything that can produce wheel outcomes for a game driver
pub trait SpinSource {
    /// Spin once
    fn spin(&mut self) -> Wedge;
}

/// Wheel with equally likely wedges
pub struct Wheel<R: Rng> {
    wedges: Vec<Wedge>,
    rng: R,
}

impl<R: Rng> Wheel<R> {
    /// The standard ten-wedge wheel
    pub fn standard(rng: R) -> Self {
        Self::with_values(&STANDARD_WEDGES, rng)
    }

    /// A wheel with custom raw values
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn with_values(values: &[i32], rng: R) -> Self {
        assert!(!values.is_empty(), "wheel needs at least one wedge");
        Self {
            wedges: values.iter().copied().map(Wedge::from_value).collect(),
            rng,
        }
    }

    #[must_use]
    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }
}

impl<R: Rng> SpinSource for Wheel<R> {
    fn spin(&mut self) -> Wedge {
        // Non-empty by construction
        *self
            .wedges
            .choose(&mut self.rng)
            .unwrap_or(&Wedge::LoseTurn)
    }
}

/// Replays a fixed list of wedges, then repeats the last one
///
/// Useful for scripted games and tests.
pub struct ScriptedWheel {
    wedges: Vec<Wedge>,
    next: usize,
}

impl ScriptedWheel {
    #[must_use]
    pub fn new(wedges: Vec<Wedge>) -> Self {
        Self { wedges, next: 0 }
    }
}

impl SpinSource for ScriptedWheel {
    fn spin(&mut self) -> Wedge {
        let wedge = self
            .wedges
            .get(self.next)
            .or_else(|| self.wedges.last())
            .copied()
            .unwrap_or(Wedge::LoseTurn);
        self.next += 1;
        wedge
    }
}
