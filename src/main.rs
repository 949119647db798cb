use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use sticks::agents::{HumanAgent, LearningAgent, MoveSource, RandomAgent};
use sticks::config::AppConfig;
use sticks::model::MoveStore;
use sticks::session::SessionRunner;

/// Play the Game of Sticks: each turn take 1-3 sticks from the pile;
/// whoever takes the last stick loses.
#[derive(Parser)]
#[command(name = "sticks", about = "Play the Game of Sticks")]
struct Cli {
    /// First player (moves first): random, human, or learning
    #[arg(long, default_value = "human")]
    player1: String,

    /// Second player: random, human, or learning
    #[arg(long, default_value = "learning")]
    player2: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "sticks.toml")]
    config: PathBuf,

    /// Override number of matches to play
    #[arg(long)]
    matches: Option<u64>,

    /// Override the fixed starting pile size
    #[arg(long)]
    pile: Option<u32>,

    /// Draw a random pile size between 3 and this value for every match
    #[arg(long)]
    random_pile_max: Option<u32>,

    /// Print pile sizes and moves as matches run
    #[arg(long)]
    show_moves: bool,

    /// Override the learned-moves file path
    #[arg(long)]
    moves_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(matches) = cli.matches {
        config.session.num_matches = matches;
    }
    if let Some(pile) = cli.pile {
        config.session.pile_size = pile;
        config.session.random_pile = false;
    }
    if let Some(max) = cli.random_pile_max {
        config.session.random_pile = true;
        config.session.random_pile_max = max;
    }
    if cli.show_moves {
        config.session.show_moves = true;
    }
    if let Some(path) = cli.moves_file {
        config.store.moves_file = path;
    }

    config.validate().context("invalid configuration")?;

    // Each slot gets its own instance, even for matching kinds, so
    // per-match state never leaks between the two roles.
    let mut player1 = make_agent(&cli.player1, &config)?;
    let mut player2 = make_agent(&cli.player2, &config)?;

    let mut runner = SessionRunner::new(config.session_config());
    let stats = runner.run(player1.as_mut(), player2.as_mut())?;

    println!();
    print!("{}", runner.summary(&stats, player1.name(), player2.name()));
    Ok(())
}

fn make_agent(kind: &str, config: &AppConfig) -> Result<Box<dyn MoveSource>> {
    match kind {
        "random" => Ok(Box::new(RandomAgent::new())),
        "human" => Ok(Box::new(HumanAgent::from_stdio())),
        "learning" => {
            let store = MoveStore::new(config.store.moves_file.clone());
            let agent = LearningAgent::new(store).with_context(|| {
                format!(
                    "loading learned moves from {}",
                    config.store.moves_file.display()
                )
            })?;
            Ok(Box::new(agent))
        }
        other => bail!("unknown player kind '{other}' (expected 'random', 'human', or 'learning')"),
    }
}
