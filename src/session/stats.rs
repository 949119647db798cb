use crate::game::{MatchOutcome, PlayerSlot};

/// Aggregated results over a run of matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    wins: [u64; 2],
    forfeits: [u64; 2],
    total: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: MatchOutcome) {
        self.total += 1;
        let winner = outcome.winner();
        self.wins[winner.index()] += 1;
        if outcome.is_forfeit() {
            // The forfeit belongs to the loser.
            self.forfeits[winner.other().index()] += 1;
        }
    }

    pub fn wins(&self, slot: PlayerSlot) -> u64 {
        self.wins[slot.index()]
    }

    pub fn forfeits(&self, slot: PlayerSlot) -> u64 {
        self.forfeits[slot.index()]
    }

    pub fn total_matches(&self) -> u64 {
        self.total
    }

    pub fn win_rate(&self, slot: PlayerSlot) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.wins(slot) as f64 / self.total as f64
    }
}
