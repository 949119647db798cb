/// Match-lifecycle signals delivered to every player by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// A new match is starting; reset any per-match state.
    Start,
    /// The match ended and this player won.
    Win,
    /// The match ended and this player lost.
    Loss,
}

/// Universal interface for all Sticks players.
pub trait MoveSource {
    /// Return the player's display name.
    fn name(&self) -> &str;

    /// Decide how many sticks to take given the current pile size.
    ///
    /// A legal move is in `1..=3` and at most `pile`; anything else
    /// forfeits the match to the opponent.
    fn play(&mut self, pile: u32) -> u32;

    /// Receive a lifecycle signal. Stateless players ignore it.
    fn on_lifecycle(&mut self, _signal: Lifecycle) {}
}
