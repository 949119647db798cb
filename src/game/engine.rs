use crate::agents::{Lifecycle, MoveSource};
use crate::error::EngineError;

use super::PlayerSlot;

/// Minimum number of sticks a player may take per turn.
pub const MIN_TAKE: u32 = 1;
/// Maximum number of sticks a player may take per turn.
pub const MAX_TAKE: u32 = 3;

/// How a match ended and who won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The loser took the last stick.
    Normal { winner: PlayerSlot },
    /// The loser proposed an illegal move.
    Forfeit { winner: PlayerSlot },
}

impl MatchOutcome {
    pub fn winner(self) -> PlayerSlot {
        match self {
            MatchOutcome::Normal { winner } | MatchOutcome::Forfeit { winner } => winner,
        }
    }

    pub fn is_forfeit(self) -> bool {
        matches!(self, MatchOutcome::Forfeit { .. })
    }
}

/// Presentation-only progress events emitted while a match runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent<'a> {
    PileSize(u32),
    MoveTaken { player: &'a str, take: u32 },
    IllegalMove { player: &'a str, take: u32 },
}

/// Receives match events for display. Must never influence the outcome.
pub trait ProgressSink {
    fn publish(&mut self, event: MatchEvent<'_>);
}

/// Discards all match events.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn publish(&mut self, _event: MatchEvent<'_>) {}
}

/// Runs one match between two [`MoveSource`] players.
///
/// Player 1 always moves first. Every legal move strictly shrinks the
/// pile, so a match finishes in at most `starting_pile` turns; an illegal
/// move ends it immediately as a forfeit.
pub struct GameEngine {
    sink: Box<dyn ProgressSink>,
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            sink: Box::new(NullSink),
        }
    }

    pub fn with_sink(sink: Box<dyn ProgressSink>) -> Self {
        GameEngine { sink }
    }

    /// Play a full match and return its outcome.
    ///
    /// Both players receive [`Lifecycle::Start`] exactly once, before the
    /// first move is requested, then exactly one of [`Lifecycle::Win`] or
    /// [`Lifecycle::Loss`] when the match ends. A move outside
    /// `MIN_TAKE..=MAX_TAKE` or exceeding the pile forfeits the match to
    /// the opponent without mutating the pile.
    pub fn play_match<'a>(
        &mut self,
        player1: &'a mut dyn MoveSource,
        player2: &'a mut dyn MoveSource,
        starting_pile: u32,
    ) -> Result<MatchOutcome, EngineError> {
        if starting_pile == 0 {
            return Err(EngineError::InvalidStartingPile);
        }

        player1.on_lifecycle(Lifecycle::Start);
        player2.on_lifecycle(Lifecycle::Start);

        let mut pile = starting_pile;
        let mut active = PlayerSlot::One;

        loop {
            self.sink.publish(MatchEvent::PileSize(pile));

            let (mover, opponent) = match active {
                PlayerSlot::One => (&mut *player1, &mut *player2),
                PlayerSlot::Two => (&mut *player2, &mut *player1),
            };

            let take = mover.play(pile);

            if !(MIN_TAKE..=MAX_TAKE).contains(&take) || take > pile {
                self.sink.publish(MatchEvent::IllegalMove {
                    player: mover.name(),
                    take,
                });
                mover.on_lifecycle(Lifecycle::Loss);
                opponent.on_lifecycle(Lifecycle::Win);
                return Ok(MatchOutcome::Forfeit {
                    winner: active.other(),
                });
            }

            self.sink.publish(MatchEvent::MoveTaken {
                player: mover.name(),
                take,
            });
            pile -= take;

            if pile == 0 {
                // The mover took the last stick and loses.
                mover.on_lifecycle(Lifecycle::Loss);
                opponent.on_lifecycle(Lifecycle::Win);
                return Ok(MatchOutcome::Normal {
                    winner: active.other(),
                });
            }

            active = active.other();
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
