//! Placement search
//!
//! Repeatedly clears the grid and replays every word until all of them fit,
//! growing the grid when allowed. Failed attempts are never rolled back word
//! by word: the next attempt starts again from an empty grid.

use crate::core::{Grid, MAX_GRID_SIDE, Word};
use log::{debug, warn};
use rand::Rng;
use std::cmp::Reverse;

/// Tuning knobs for [`populate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Full placement attempts at each grid size before growing
    pub attempts_per_size: usize,
    /// Automatic sizing gives up once the grid side would exceed
    /// `growth_factor × optimum size`
    pub growth_factor: usize,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(attempts_per_size: usize, growth_factor: usize) -> Self {
        Self {
            attempts_per_size,
            growth_factor,
        }
    }

    /// Largest side automatic sizing may grow to from `optimum`
    ///
    /// Always allows at least one growth step, unless `optimum` is already
    /// [`MAX_GRID_SIDE`].
    #[must_use]
    pub const fn growth_ceiling(&self, optimum: usize) -> usize {
        let ceiling = optimum.saturating_mul(self.growth_factor);
        let ceiling = if ceiling > optimum { ceiling } else { optimum.saturating_add(1) };
        if ceiling > MAX_GRID_SIDE { MAX_GRID_SIDE } else { ceiling }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(20, 2)
    }
}

/// Whether the search may change the grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Dimensions are pinned; failure is reported at the current size
    Forced,
    /// Grow one row and one column at a time, up to `ceiling` cells per side
    Auto { ceiling: usize },
}

/// Final state of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// Summary of a finished search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Total attempts across every grid size
    pub attempts: usize,
    /// How many times the grid grew
    pub growths: usize,
    pub width: usize,
    pub height: usize,
    /// Words left without a placement
    pub unplaced: usize,
}

impl SearchReport {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }
}

/// Place every word in the grid
///
/// Words are tried longest first (ties keep list order). Each attempt clears
/// the grid and every placement, then places words one by one, abandoning the
/// attempt at the first word that does not fit. After
/// `config.attempts_per_size` failed attempts the grid grows by one row and
/// one column, unless `sizing` is [`Sizing::Forced`] or the ceiling is
/// reached.
///
/// On failure the grid holds the partial result of the last attempt.
pub fn populate<R: Rng + ?Sized>(
    grid: &mut Grid,
    words: &mut [Word],
    sizing: Sizing,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchReport {
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&i| Reverse(words[i].len()));

    let attempts_per_size = config.attempts_per_size.max(1);
    let mut attempts = 0;
    let mut growths = 0;

    let outcome = loop {
        let mut placed = false;
        for _ in 0..attempts_per_size {
            attempts += 1;
            grid.clear(rng);
            words.iter_mut().for_each(Word::unplace);
            if order.iter().all(|&i| words[i].place(grid, rng)) {
                placed = true;
                break;
            }
        }

        if placed {
            break Outcome::Succeeded;
        }

        let (width, height) = grid.size();
        match sizing {
            Sizing::Forced => break Outcome::Failed,
            Sizing::Auto { ceiling } if width.max(height) + 1 > ceiling => {
                warn!("Giving up at {width}x{height}: growth ceiling {ceiling} reached");
                break Outcome::Failed;
            }
            Sizing::Auto { .. } => {
                debug!(
                    "No fit in {width}x{height} after {attempts_per_size} attempts, growing to {}x{}",
                    width + 1,
                    height + 1
                );
                grid.resize(width + 1, height + 1);
                growths += 1;
            }
        }
    };

    let (width, height) = grid.size();
    let report = SearchReport {
        outcome,
        attempts,
        growths,
        width,
        height,
        unplaced: words.iter().filter(|w| !w.is_placed()).count(),
    };
    debug!(
        "Search {:?} for {} words in {width}x{height} ({attempts} attempts, {growths} growths)",
        report.outcome,
        words.len()
    );
    report
}
