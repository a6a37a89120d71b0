//! Player earnings ledger
//!
//! Owns every player's balance. Balances are unsigned, and the penalty wedge
//! clamps at zero instead of going negative.

use crate::core::{Player, rotate};
use rustc_hash::FxHashMap;

/// Amount taken by the "lose turn and $1000" wedge
pub const PENALTY_AMOUNT: u32 = 1000;

/// Balance change caused by a penalty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyApplied {
    pub before: u32,
    pub after: u32,
}

/// Cumulative earnings per player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balances: FxHashMap<Player, u32>,
}

impl Ledger {
    /// Create a ledger with every player at $0
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: Player::ALL.into_iter().map(|p| (p, 0)).collect(),
        }
    }

    /// Current balance of `player`
    #[inline]
    #[must_use]
    pub fn earnings(&self, player: Player) -> u32 {
        self.balances.get(&player).copied().unwrap_or(0)
    }

    /// Add `amount` to the player's balance, saturating at `u32::MAX`
    ///
    /// Returns the new balance.
    pub fn credit(&mut self, player: Player, amount: u32) -> u32 {
        let balance = self.balances.entry(player).or_insert(0);
        *balance = balance.saturating_add(amount);
        *balance
    }

    /// Take $1000 from the player, or reset them to $0 if they have less
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::Player;
    /// use wheel_of_fortune::game::Ledger;
    ///
    /// let mut ledger = Ledger::new();
    /// ledger.credit(Player::One, 500);
    /// let change = ledger.apply_penalty(Player::One);
    /// assert_eq!((change.before, change.after), (500, 0));
    /// ```
    pub fn apply_penalty(&mut self, player: Player) -> PenaltyApplied {
        let balance = self.balances.entry(player).or_insert(0);
        let before = *balance;
        *balance = before.saturating_sub(PENALTY_AMOUNT);
        PenaltyApplied {
            before,
            after: *balance,
        }
    }

    /// The player who acts after `current`
    #[inline]
    #[must_use]
    pub const fn advance_turn(current: Player) -> Player {
        rotate(current)
    }

    /// Every player's balance in turn order
    #[must_use]
    pub fn standings(&self) -> Vec<(Player, u32)> {
        Player::ALL
            .into_iter()
            .map(|p| (p, self.earnings(p)))
            .collect()
    }

    /// Player with the highest balance, earliest seat on ties
    #[must_use]
    pub fn leader(&self) -> Player {
        Player::ALL
            .into_iter()
            .rev()
            .max_by_key(|&p| self.earnings(p))
            .unwrap_or(Player::FIRST)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ledger_starts_at_zero() {
        let ledger = Ledger::new();
        for player in Player::ALL {
            assert_eq!(ledger.earnings(player), 0);
        }
    }

    #[test]
    fn credit_accumulates_per_player() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.credit(Player::Two, 900), 900);
        assert_eq!(ledger.credit(Player::Two, 300), 1200);
        assert_eq!(ledger.earnings(Player::One), 0);
        assert_eq!(ledger.earnings(Player::Three), 0);
    }

    #[test]
    fn credit_base_times_occurrences() {
        // $300 wedge, letter appears three times
        let mut ledger = Ledger::new();
        ledger.credit(Player::One, 300 * 3);
        assert_eq!(ledger.earnings(Player::One), 900);
    }

    #[test]
    fn credit_saturates() {
        let mut ledger = Ledger::new();
        ledger.credit(Player::One, u32::MAX);
        assert_eq!(ledger.credit(Player::One, 5000), u32::MAX);
    }

    #[test]
    fn penalty_clamps_to_zero() {
        let mut ledger = Ledger::new();
        ledger.credit(Player::One, 500);
        let change = ledger.apply_penalty(Player::One);
        assert_eq!(change, PenaltyApplied { before: 500, after: 0 });
        assert_eq!(ledger.earnings(Player::One), 0);
    }

    #[test]
    fn penalty_subtracts_when_affordable() {
        let mut ledger = Ledger::new();
        ledger.credit(Player::Three, 1500);
        let change = ledger.apply_penalty(Player::Three);
        assert_eq!(change, PenaltyApplied { before: 1500, after: 500 });
    }

    #[test]
    fn penalty_exact_balance_reaches_zero() {
        let mut ledger = Ledger::new();
        ledger.credit(Player::Two, 1000);
        assert_eq!(ledger.apply_penalty(Player::Two).after, 0);
    }

    #[test]
    fn penalty_on_empty_balance_stays_zero() {
        let mut ledger = Ledger::new();
        let change = ledger.apply_penalty(Player::One);
        assert_eq!(change, PenaltyApplied { before: 0, after: 0 });
    }

    #[test]
    fn advance_turn_wraps() {
        assert_eq!(Ledger::advance_turn(Player::One), Player::Two);
        assert_eq!(Ledger::advance_turn(Player::Two), Player::Three);
        assert_eq!(Ledger::advance_turn(Player::Three), Player::One);
    }

    #[test]
    fn standings_in_turn_order() {
        let mut ledger = Ledger::new();
        ledger.credit(Player::Three, 700);
        ledger.credit(Player::One, 100);
        assert_eq!(
            ledger.standings(),
            vec![(Player::One, 100), (Player::Two, 0), (Player::Three, 700)]
        );
    }

    #[test]
    fn leader_prefers_earliest_seat_on_tie() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.leader(), Player::One);
        ledger.credit(Player::Two, 500);
        ledger.credit(Player::Three, 500);
        assert_eq!(ledger.leader(), Player::Two);
    }
}
