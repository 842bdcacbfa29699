//! Round progression for the settlement.

use bevy::prelude::*;

/// Tracks the current round and whether the pending round-advance has been
/// held open by the placement coordinator.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    current_round: u32,
    held: bool,
}

impl Default for Round {
    fn default() -> Self {
        Self {
            current_round: 1,
            held: false,
        }
    }
}

impl Round {
    pub fn current(&self) -> u32 {
        self.current_round
    }

    /// True if the last advance request was refused
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Records that the round may not close yet.
    pub fn hold(&mut self) {
        self.held = true;
    }

    /// Closes the round and opens the next one.
    pub fn advance(&mut self) {
        self.current_round += 1;
        self.held = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_round_one() {
        let round = Round::default();
        assert_eq!(round.current(), 1);
        assert!(!round.is_held());
    }

    #[test]
    fn hold_then_advance() {
        let mut round = Round::default();
        round.hold();
        assert!(round.is_held());
        assert_eq!(round.current(), 1);

        round.advance();
        assert!(!round.is_held());
        assert_eq!(round.current(), 2);
    }
}
