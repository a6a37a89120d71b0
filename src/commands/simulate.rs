//! Simulate many bot games
//!
//! Runs independent games in parallel and aggregates the results.

use crate::bot::{GameRecord, StrategyType, play_game};
use crate::core::Player;
use crate::game::{Corpus, GameError, Session, Wheel};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulateConfig {
    pub games: usize,
    pub strategy: StrategyType,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    /// Games still unsolved after this many rounds count as unfinished
    pub max_rounds: usize,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(games: usize, strategy: StrategyType) -> Self {
        Self {
            games,
            strategy,
            seed: 0,
            max_rounds: 500,
            show_progress: true,
        }
    }
}

/// Aggregate statistics over all simulated games
#[derive(Debug)]
pub struct SimulationStats {
    pub strategy: &'static str,
    pub total_games: usize,
    pub finished: usize,
    pub wins: FxHashMap<Player, usize>,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub solved_by_guess: usize,
    pub penalties: usize,
    pub lost_turns: usize,
    pub average_winning_earnings: f64,
    /// Highest winning total: (phrase, player, earnings)
    pub best_game: Option<(String, Player, u32)>,
    pub total_time: Duration,
}

/// Play one seeded game
///
/// # Errors
/// Only if the game engine rejects a bot move, which indicates a bug.
pub fn simulate_game(
    corpus: &Corpus,
    strategy: &StrategyType,
    seed: u64,
    max_rounds: usize,
) -> Result<GameRecord, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut wheel = Wheel::standard(StdRng::seed_from_u64(rng.random()));
    let session = Session::start(corpus, &mut rng);
    play_game(session, corpus, strategy, &mut wheel, &mut rng, max_rounds)
}

/// Run `config.games` games in parallel
///
/// Results are deterministic for a given seed regardless of thread count.
///
/// # Errors
/// Propagates the first `GameError` from any game.
///
/// # Panics
/// Panics if the progress bar template is invalid.
pub fn run_simulation(
    corpus: &Corpus,
    config: &SimulateConfig,
) -> Result<SimulationStats, GameError> {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = simulate_game(
                corpus,
                &config.strategy,
                config.seed.wrapping_add(i as u64),
                config.max_rounds,
            );
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let stats = summarize(&records, config.strategy.name(), start.elapsed());
    log::info!(
        "Simulated {} games with {} strategy: {} finished, {:.1} rounds on average",
        stats.total_games,
        stats.strategy,
        stats.finished,
        stats.average_rounds
    );
    Ok(stats)
}

/// Aggregate game records
#[must_use]
pub fn summarize(
    records: &[GameRecord],
    strategy: &'static str,
    total_time: Duration,
) -> SimulationStats {
    let finished: Vec<&GameRecord> = records.iter().filter(|r| r.winner.is_some()).collect();

    let mut wins: FxHashMap<Player, usize> = FxHashMap::default();
    let mut winning_total = 0u64;
    let mut best_game: Option<(String, Player, u32)> = None;
    for record in &finished {
        let Some(winner) = record.winner else {
            continue;
        };
        *wins.entry(winner.player).or_insert(0) += 1;
        winning_total += u64::from(winner.earnings);
        if best_game
            .as_ref()
            .is_none_or(|(_, _, best)| winner.earnings > *best)
        {
            best_game = Some((record.phrase.clone(), winner.player, winner.earnings));
        }
    }

    let rounds = finished.iter().map(|r| r.rounds);
    let average = |total: f64| {
        if finished.is_empty() {
            0.0
        } else {
            total / finished.len() as f64
        }
    };

    SimulationStats {
        strategy,
        total_games: records.len(),
        finished: finished.len(),
        average_rounds: average(rounds.clone().sum::<usize>() as f64),
        min_rounds: rounds.clone().min().unwrap_or(0),
        max_rounds: rounds.max().unwrap_or(0),
        average_winning_earnings: average(winning_total as f64),
        wins,
        solved_by_guess: finished.iter().filter(|r| r.solved_by_guess).count(),
        penalties: records.iter().map(|r| r.penalties).sum(),
        lost_turns: records.iter().map(|r| r.lost_turns).sum(),
        best_game,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::game::Winner;

    fn quiet(games: usize, strategy: StrategyType) -> SimulateConfig {
        SimulateConfig {
            show_progress: false,
            seed: 1234,
            ..SimulateConfig::new(games, strategy)
        }
    }

    #[test]
    fn simulation_is_deterministic() {
        let corpus = Corpus::embedded().unwrap();
        let config = quiet(40, StrategyType::from_name("frequency"));

        let a = run_simulation(&corpus, &config).unwrap();
        let b = run_simulation(&corpus, &config).unwrap();

        assert_eq!(a.wins, b.wins);
        assert_eq!(a.average_rounds.to_bits(), b.average_rounds.to_bits());
        assert_eq!(a.penalties, b.penalties);
        assert_eq!(a.best_game, b.best_game);
    }

    #[test]
    fn every_simulated_game_finishes() {
        let corpus = Corpus::embedded().unwrap();
        let stats = run_simulation(&corpus, &quiet(50, StrategyType::default())).unwrap();

        assert_eq!(stats.total_games, 50);
        assert_eq!(stats.finished, 50);
        assert_eq!(stats.wins.values().sum::<usize>(), 50);
        assert!(stats.min_rounds >= 1);
        assert!(stats.max_rounds >= stats.min_rounds);
    }

    #[test]
    fn simulate_game_matches_seed() {
        let corpus = Corpus::embedded().unwrap();
        let strategy = StrategyType::from_name("random");
        let a = simulate_game(&corpus, &strategy, 77, 500).unwrap();
        let b = simulate_game(&corpus, &strategy, 77, 500).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn summarize_counts_unfinished_games() {
        let records = vec![
            GameRecord {
                category: Category::Food,
                phrase: "BOWL OF RAMEN NOODLES".to_string(),
                winner: Some(Winner {
                    player: Player::Two,
                    earnings: 3000,
                }),
                rounds: 10,
                penalties: 1,
                lost_turns: 2,
                solved_by_guess: true,
            },
            GameRecord {
                category: Category::Songs,
                phrase: "STAIRWAY TO HEAVEN".to_string(),
                winner: None,
                rounds: 500,
                penalties: 3,
                lost_turns: 40,
                solved_by_guess: false,
            },
            GameRecord {
                category: Category::Places,
                phrase: "AIR FORCE BASE".to_string(),
                winner: Some(Winner {
                    player: Player::Two,
                    earnings: 1000,
                }),
                rounds: 20,
                penalties: 0,
                lost_turns: 0,
                solved_by_guess: false,
            },
        ];

        let stats = summarize(&records, "corpus", Duration::from_secs(1));
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.finished, 2);
        assert_eq!(stats.wins.get(&Player::Two), Some(&2));
        assert!((stats.average_rounds - 15.0).abs() < f64::EPSILON);
        assert_eq!((stats.min_rounds, stats.max_rounds), (10, 20));
        assert!((stats.average_winning_earnings - 2000.0).abs() < f64::EPSILON);
        assert_eq!(stats.solved_by_guess, 1);
        assert_eq!(stats.penalties, 4);
        assert_eq!(stats.lost_turns, 42);
        assert_eq!(
            stats.best_game,
            Some(("BOWL OF RAMEN NOODLES".to_string(), Player::Two, 3000))
        );
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], "random", Duration::ZERO);
        assert_eq!(stats.finished, 0);
        assert!(stats.average_rounds.abs() < f64::EPSILON);
        assert!(stats.best_game.is_none());
    }
}
