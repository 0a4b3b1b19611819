//! Benchmark command
//!
//! Generates many puzzles from random samples of a word pool and reports how
//! often the placement search succeeds and how far grids had to grow.

use super::generate::{GenerateConfig, generate_puzzle};
use crate::error::PuzzleError;
use crate::puzzle::PuzzleStats;
use crate::wordlists::WordEntry;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub puzzles: usize,
    pub words_per_puzzle: usize,
    /// Force every grid to `(width, height)`
    pub size: Option<(usize, usize)>,
    /// Base seed; puzzle `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            puzzles: 100,
            words_per_puzzle: 12,
            size: None,
            seed: None,
            show_progress: true,
        }
    }
}

/// Outcome of one generated puzzle
struct PuzzleRun {
    complete: bool,
    width: usize,
    growth: usize,
    fill_ratio: f64,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Grid width → number of puzzles
    pub size_distribution: HashMap<usize, usize>,
    pub average_growth: f64,
    pub max_growth: usize,
    pub average_fill: f64,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_puzzles == 0 {
            0.0
        } else {
            self.succeeded as f64 / self.total_puzzles as f64 * 100.0
        }
    }
}

/// Generate `config.puzzles` puzzles in parallel from samples of `pool`
///
/// # Errors
///
/// Returns an error if the forced size has a zero dimension.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    pool: &[WordEntry],
) -> Result<BenchmarkResult, PuzzleError> {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    debug!(
        "Benchmark: {} puzzles of {} words (seed {base_seed})",
        config.puzzles, config.words_per_puzzle
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.puzzles as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let runs = (0..config.puzzles)
        .into_par_iter()
        .map(|i| -> Result<PuzzleRun, PuzzleError> {
            let seed = base_seed.wrapping_add(i as u64);
            let mut rng = StdRng::seed_from_u64(seed);
            let entries: Vec<WordEntry> = pool
                .choose_multiple(&mut rng, config.words_per_puzzle)
                .cloned()
                .collect();

            let mut generate = GenerateConfig::new(entries);
            generate.size = config.size;
            generate.seed = Some(seed);
            let result = generate_puzzle(generate)?;

            let stats = PuzzleStats::collect(&result.puzzle);
            pb.inc(1);
            Ok(PuzzleRun {
                complete: result.placement_error.is_none() && result.puzzle.is_complete(),
                width: stats.width,
                growth: stats.growth(),
                fill_ratio: stats.fill_ratio(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_puzzles = runs.len();
    let succeeded = runs.iter().filter(|r| r.complete).count();

    let mut size_distribution: HashMap<usize, usize> = HashMap::new();
    for run in &runs {
        *size_distribution.entry(run.width).or_insert(0) += 1;
    }

    let average = |total: f64| {
        if total_puzzles == 0 {
            0.0
        } else {
            total / total_puzzles as f64
        }
    };

    Ok(BenchmarkResult {
        total_puzzles,
        succeeded,
        failed: total_puzzles - succeeded,
        size_distribution,
        average_growth: average(runs.iter().map(|r| r.growth as f64).sum()),
        max_growth: runs.iter().map(|r| r.growth).max().unwrap_or(0),
        average_fill: average(runs.iter().map(|r| r.fill_ratio).sum()),
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
