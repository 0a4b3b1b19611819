//! Grid sizing heuristic

/// Extra letters to leave around the longest word
const LONGEST_WORD_MARGIN: usize = 2;

/// Target ratio of grid cells to word letters
const DENSITY_FACTOR: f64 = 1.2;

/// Side length of the square grid that should fit the current word set
///
/// Balances the longest single word (plus a margin of two cells) against
/// the total number of letters scaled by 1.2. This is a starting point for
/// the search, not a guarantee of fit.
///
/// # Examples
/// ```
/// use findthatword::solver::optimum_size;
///
/// // One short word: the longest word dominates
/// assert_eq!(optimum_size(3, 3), 5);
/// // Many letters: density dominates
/// assert_eq!(optimum_size(5, 100), 11);
/// ```
#[must_use]
pub fn optimum_size(longest_word: usize, total_letters: usize) -> usize {
    let by_longest = longest_word + LONGEST_WORD_MARGIN;
    let scaled_letters = total_letters as f64 * DENSITY_FACTOR;
    if (by_longest * by_longest) as f64 > scaled_letters {
        by_longest
    } else {
        scaled_letters.sqrt() as usize + 1
    }
}
