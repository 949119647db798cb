use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agents::MoveSource;
use crate::error::EngineError;
use crate::game::{GameEngine, MatchEvent, PlayerSlot, ProgressSink};

use super::stats::SessionStats;

/// How the starting pile for each match is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileSelection {
    Fixed(u32),
    /// Uniform in `min..=max`, drawn fresh for every match.
    Random { min: u32, max: u32 },
}

/// Configuration for a run of matches.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub num_matches: u64,
    pub pile: PileSelection,
    /// Print pile sizes and moves as they happen.
    pub show_moves: bool,
}

/// Prints match progress in the interactive game format.
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn publish(&mut self, event: MatchEvent<'_>) {
        match event {
            MatchEvent::PileSize(pile) => println!("Pile size = {pile}"),
            MatchEvent::MoveTaken { player, take } => println!("{player} took {take} sticks."),
            MatchEvent::IllegalMove { player, .. } => println!("{player} made an illegal play."),
        }
    }
}

/// Runs matches back to back and aggregates the outcomes.
///
/// Player 1 always moves first. The two player slots must be
/// independently constructed agents, even when they are the same kind,
/// so per-match state cannot leak between roles.
pub struct SessionRunner {
    config: SessionConfig,
    rng: StdRng,
}

impl SessionRunner {
    pub fn new(config: SessionConfig) -> Self {
        SessionRunner {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic pile selection for tests.
    pub fn seeded(config: SessionConfig, seed: u64) -> Self {
        SessionRunner {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Play the configured number of matches and return the tallies.
    pub fn run(
        &mut self,
        player1: &mut dyn MoveSource,
        player2: &mut dyn MoveSource,
    ) -> Result<SessionStats, EngineError> {
        let (p1_name, p2_name) = display_names(player1.name(), player2.name());

        let mut engine = if self.config.show_moves {
            GameEngine::with_sink(Box::new(ConsoleSink))
        } else {
            GameEngine::new()
        };

        let mut stats = SessionStats::new();
        for match_no in 1..=self.config.num_matches {
            let pile = self.next_pile();
            println!("\nGame No. {match_no} ({pile} Sticks)");

            let outcome = engine.play_match(player1, player2, pile)?;
            let winner_name = match outcome.winner() {
                PlayerSlot::One => &p1_name,
                PlayerSlot::Two => &p2_name,
            };
            println!("{winner_name} wins!");

            stats.record(outcome);
        }
        Ok(stats)
    }

    fn next_pile(&mut self) -> u32 {
        match self.config.pile {
            PileSelection::Fixed(pile) => pile,
            PileSelection::Random { min, max } => self.rng.random_range(min..=max),
        }
    }

    /// Render the final report in the interactive game format.
    pub fn summary(&self, stats: &SessionStats, player1: &str, player2: &str) -> String {
        let (p1_name, p2_name) = display_names(player1, player2);

        let pile_desc = match self.config.pile {
            PileSelection::Fixed(pile) => pile.to_string(),
            PileSelection::Random { min, max } => format!("{min}-{max}"),
        };

        let mut out = format!(
            "Pile size: {pile_desc}  Games: {}\n",
            stats.total_matches()
        );
        out.push_str(&format!(
            "{p1_name} won {} times (went first)\n",
            stats.wins(PlayerSlot::One)
        ));
        out.push_str(&format!(
            "{p2_name} won {} times\n",
            stats.wins(PlayerSlot::Two)
        ));
        for (name, slot) in [(&p1_name, PlayerSlot::One), (&p2_name, PlayerSlot::Two)] {
            let forfeits = stats.forfeits(slot);
            if forfeits > 0 {
                out.push_str(&format!("{name} forfeited {forfeits} game(s).\n"));
            }
        }
        out
    }
}

/// Two agents of the same kind share a display name; tell them apart.
fn display_names(p1: &str, p2: &str) -> (String, String) {
    if p1 == p2 {
        (format!("Good {p1}"), format!("Evil {p2}"))
    } else {
        (p1.to_string(), p2.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::agents::Lifecycle;
    use crate::game::MatchOutcome;

    use super::*;

    /// Cycles through a fixed move sequence forever.
    struct CyclingAgent {
        name: &'static str,
        moves: Vec<u32>,
        next: usize,
        piles_seen: Vec<u32>,
    }

    impl CyclingAgent {
        fn new(name: &'static str, moves: Vec<u32>) -> Self {
            CyclingAgent {
                name,
                moves,
                next: 0,
                piles_seen: Vec::new(),
            }
        }
    }

    impl MoveSource for CyclingAgent {
        fn name(&self) -> &str {
            self.name
        }

        fn play(&mut self, pile: u32) -> u32 {
            self.piles_seen.push(pile);
            let take = self.moves[self.next % self.moves.len()];
            self.next += 1;
            take
        }

        fn on_lifecycle(&mut self, _signal: Lifecycle) {}
    }

    fn config(num_matches: u64, pile: PileSelection) -> SessionConfig {
        SessionConfig {
            num_matches,
            pile,
            show_moves: false,
        }
    }

    #[test]
    fn test_runs_requested_number_of_matches() {
        let mut runner = SessionRunner::seeded(config(6, PileSelection::Fixed(5)), 0);
        let mut p1 = CyclingAgent::new("A", vec![1]);
        let mut p2 = CyclingAgent::new("B", vec![1]);

        let stats = runner.run(&mut p1, &mut p2).unwrap();
        assert_eq!(stats.total_matches(), 6);
        // Pile 5 with both taking 1: P1 always takes the last stick.
        assert_eq!(stats.wins(PlayerSlot::Two), 6);
    }

    #[test]
    fn test_counts_forfeits() {
        let mut runner = SessionRunner::seeded(config(3, PileSelection::Fixed(5)), 0);
        let mut p1 = CyclingAgent::new("A", vec![6]);
        let mut p2 = CyclingAgent::new("B", vec![1]);

        let stats = runner.run(&mut p1, &mut p2).unwrap();
        assert_eq!(stats.wins(PlayerSlot::Two), 3);
        assert_eq!(stats.forfeits(PlayerSlot::One), 3);
    }

    #[test]
    fn test_random_piles_stay_in_range() {
        let mut runner =
            SessionRunner::seeded(config(20, PileSelection::Random { min: 3, max: 8 }), 9);
        let mut p1 = CyclingAgent::new("A", vec![1]);
        let mut p2 = CyclingAgent::new("B", vec![1]);

        runner.run(&mut p1, &mut p2).unwrap();
        // P1 sees the full starting pile on its first turn of each match.
        assert!(p1.piles_seen.iter().any(|&p| p >= 3));
        assert!(p1
            .piles_seen
            .iter()
            .filter(|&&p| p >= 3)
            .all(|&p| p <= 8));
    }

    #[test]
    fn test_invalid_fixed_pile_is_rejected() {
        let mut runner = SessionRunner::seeded(config(1, PileSelection::Fixed(0)), 0);
        let mut p1 = CyclingAgent::new("A", vec![1]);
        let mut p2 = CyclingAgent::new("B", vec![1]);

        assert!(matches!(
            runner.run(&mut p1, &mut p2),
            Err(EngineError::InvalidStartingPile)
        ));
    }

    #[test]
    fn test_display_names_disambiguate_duplicates() {
        assert_eq!(
            display_names("Random", "Random"),
            ("Good Random".to_string(), "Evil Random".to_string())
        );
        assert_eq!(
            display_names("Human", "Learner"),
            ("Human".to_string(), "Learner".to_string())
        );
    }

    #[test]
    fn test_learning_agent_improves_its_store_over_a_session() {
        use crate::agents::LearningAgent;
        use crate::model::MoveStore;

        let dir = tempfile::tempdir().unwrap();
        let moves_file = dir.path().join("moves.txt");

        // The opponent opens with 1, lets the learner move once at pile 9,
        // then forfeits. The learner wins every match and reinforces its
        // pile-9 choice each time.
        let mut runner = SessionRunner::seeded(config(5, PileSelection::Fixed(10)), 0);
        let mut p1 = CyclingAgent::new("A", vec![1, 9]);
        let mut p2 = LearningAgent::seeded(MoveStore::new(&moves_file), 42).unwrap();

        let stats = runner.run(&mut p1, &mut p2).unwrap();
        assert_eq!(stats.wins(PlayerSlot::Two), 5);
        assert_eq!(stats.forfeits(PlayerSlot::One), 5);

        // Five wins persisted five extra entries into the pile-9 bucket.
        let reloaded = MoveStore::new(&moves_file).load().unwrap();
        assert_eq!(reloaded[8].len(), 3 + 5);
    }

    #[test]
    fn test_summary_reports_wins_and_forfeits() {
        let runner = SessionRunner::seeded(config(4, PileSelection::Fixed(10)), 0);
        let mut stats = SessionStats::new();
        for _ in 0..3 {
            stats.record(MatchOutcome::Normal {
                winner: PlayerSlot::One,
            });
        }
        stats.record(MatchOutcome::Forfeit {
            winner: PlayerSlot::One,
        });

        let summary = runner.summary(&stats, "Learner", "Random");
        assert!(summary.contains("Pile size: 10  Games: 4"));
        assert!(summary.contains("Learner won 4 times (went first)"));
        assert!(summary.contains("Random won 0 times"));
        assert!(summary.contains("Random forfeited 1 game(s)."));
        assert!(!summary.contains("Learner forfeited"));
    }
}
