//! Wheel of Fortune - CLI
//!
//! Three-player Wheel of Fortune with TUI and text modes, plus a bot simulator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wheel_of_fortune::{
    bot::StrategyType,
    commands::{SimulateConfig, run_simple, run_simulation},
    corpus::loader::load_from_file,
    game::Corpus,
    output::{print_corpus, print_simulation_stats},
};

#[derive(Parser)]
#[command(
    name = "wheel_of_fortune",
    about = "Three-player Wheel of Fortune for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle file ('Category|PHRASE' per line); defaults to the built-in corpus
    #[arg(short, long, global = true)]
    puzzles: Option<String>,

    /// Seed for the wheel and puzzle selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text prompts without TUI)
    Simple,

    /// Let bots play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Strategy: corpus (default), frequency, random
        #[arg(short, long, default_value = "corpus")]
        strategy: String,

        /// Give up on a game after this many rounds
        #[arg(long, default_value = "500")]
        max_rounds: usize,
    },

    /// List the puzzle corpus
    Puzzles,
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());
    let cli = Cli::parse();

    let corpus = load_corpus(cli.puzzles.as_deref())?;

    match cli.command {
        Some(Commands::Play) | None => run_play_command(&corpus, cli.seed),
        Some(Commands::Simple) => Ok(run_simple(&corpus, cli.seed)?),
        Some(Commands::Simulate {
            games,
            strategy,
            max_rounds,
        }) => run_simulate_command(&corpus, games, &strategy, max_rounds, cli.seed),
        Some(Commands::Puzzles) => {
            print_corpus(&corpus);
            Ok(())
        }
    }
}

/// Load the corpus named by `--puzzles`, or the embedded one
fn load_corpus(path: Option<&str>) -> Result<Corpus> {
    let corpus = match path {
        Some(path) => load_from_file(path)?,
        None => Corpus::embedded()?,
    };
    log::info!("Corpus ready: {} puzzles", corpus.len());
    Ok(corpus)
}

fn run_simulate_command(
    corpus: &Corpus,
    games: usize,
    strategy_name: &str,
    max_rounds: usize,
    seed: Option<u64>,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let config = SimulateConfig {
        seed: seed.unwrap_or_else(rand::random),
        max_rounds,
        ..SimulateConfig::new(games, strategy)
    };

    println!(
        "Simulating {games} games with the {} strategy (seed {})...",
        strategy.name(),
        config.seed
    );
    let stats = run_simulation(corpus, &config)?;
    print_simulation_stats(&stats);
    Ok(())
}

fn run_play_command(corpus: &Corpus, seed: Option<u64>) -> Result<()> {
    use wheel_of_fortune::interactive::{App, run_tui};

    let app = App::new(corpus, seed);
    run_tui(app)
}
