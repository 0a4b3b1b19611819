//! Letter grid
//!
//! The grid keeps two parallel layers of `width × height` cells:
//! - the words layer, holding letters written by placed words
//! - the padding layer, holding filler letters for the remaining cells
//!
//! Cells are stored row-major, so iterating the backing vectors visits
//! `(0, 0), (1, 0), ... (width - 1, 0), (0, 1), ...`.

use super::Direction;
use super::text::normalize;
use crate::error::PuzzleError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Largest allowed width or height
pub const MAX_GRID_SIDE: usize = 1000;

/// A cell coordinate, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The cell `steps` moves away along `direction`
    ///
    /// Returns `None` when the walk would leave the non-negative quadrant.
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        Some(Self {
            x: self.x.checked_add_signed(dx.checked_mul(steps)?)?,
            y: self.y.checked_add_signed(dy.checked_mul(steps)?)?,
        })
    }
}

/// Which layer of a cell to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Letters written by placed words only
    Words,
    /// Filler letters only
    Padding,
    /// The word letter if present, otherwise the filler letter
    Combined,
}

/// The puzzle's two-layer letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<u8>>,
    padding: Vec<Option<u8>>,
    hidden_message: String,
    random_padding: bool,
}

impl Grid {
    /// Check that `width × height` is a usable grid size
    ///
    /// Both sides must be in `1..=MAX_GRID_SIDE`.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidDimensions` otherwise.
    pub const fn check_dimensions(width: usize, height: usize) -> Result<(), PuzzleError> {
        if width == 0 || height == 0 || width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            Err(PuzzleError::InvalidDimensions { width, height })
        } else {
            Ok(())
        }
    }

    /// Cell count of a `width × height` grid
    fn area(width: usize, height: usize) -> usize {
        match (Self::check_dimensions(width, height), width.checked_mul(height)) {
            (Ok(()), Some(area)) => area,
            _ => panic!(
                "grid dimensions must be within 1..={MAX_GRID_SIDE}, got {width}x{height}"
            ),
        }
    }

    /// Create an empty grid with blank padding
    ///
    /// # Panics
    /// Panics if either dimension is zero or larger than [`MAX_GRID_SIDE`].
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let area = Self::area(width, height);
        Self {
            width,
            height,
            cells: vec![None; area],
            padding: vec![None; area],
            hidden_message: String::new(),
            random_padding: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    #[must_use]
    pub const fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn hidden_message(&self) -> &str {
        &self.hidden_message
    }

    #[must_use]
    pub const fn random_padding(&self) -> bool {
        self.random_padding
    }

    /// Reallocate both layers at the new size, every cell empty
    ///
    /// Padding is left blank until the next [`Grid::clear`] or
    /// [`Grid::recompute_padding`].
    ///
    /// # Panics
    /// Panics if either dimension is zero or larger than [`MAX_GRID_SIDE`].
    pub fn resize(&mut self, width: usize, height: usize) {
        let area = Self::area(width, height);
        self.width = width;
        self.height = height;
        self.cells = vec![None; area];
        self.padding = vec![None; area];
    }

    /// Empty every cell of the words layer and refill the padding
    pub fn clear<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.fill(None);
        self.recompute_padding(rng);
    }

    /// True if `position` lies inside the grid
    #[inline]
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, PuzzleError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(PuzzleError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Read one layer of a cell
    ///
    /// Returns `None` for an empty word cell or a blank padding cell.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid; use [`Grid::try_get_cell`]
    /// for a checked read.
    #[must_use]
    pub fn get_cell(&self, x: usize, y: usize, layer: Layer) -> Option<u8> {
        match self.try_get_cell(x, y, layer) {
            Ok(letter) => letter,
            Err(e) => panic!("{e}"),
        }
    }

    /// Checked variant of [`Grid::get_cell`]
    ///
    /// # Errors
    /// Returns `PuzzleError::OutOfBounds` if `(x, y)` lies outside the grid.
    pub fn try_get_cell(&self, x: usize, y: usize, layer: Layer) -> Result<Option<u8>, PuzzleError> {
        let i = self.index(x, y)?;
        Ok(match layer {
            Layer::Words => self.cells[i],
            Layer::Padding => self.padding[i],
            Layer::Combined => self.cells[i].or(self.padding[i]),
        })
    }

    /// Combined-layer letter as a display character, `' '` when blank
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    #[must_use]
    pub fn display_char(&self, x: usize, y: usize) -> char {
        self.get_cell(x, y, Layer::Combined).map_or(' ', char::from)
    }

    /// Write a letter into the words layer
    ///
    /// No collision checking is done; callers verify the placement first.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, letter: u8) {
        match self.index(x, y) {
            Ok(i) => self.cells[i] = Some(letter),
            Err(e) => panic!("{e}"),
        }
    }

    /// Number of cells holding a word letter
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Change the hidden message and refill the padding
    pub fn set_hidden_message<R: Rng + ?Sized>(&mut self, message: impl Into<String>, rng: &mut R) {
        self.hidden_message = message.into();
        self.recompute_padding(rng);
    }

    /// Switch between random filler and the hidden message, then refill
    pub fn set_random_padding<R: Rng + ?Sized>(&mut self, random_padding: bool, rng: &mut R) {
        self.random_padding = random_padding;
        self.recompute_padding(rng);
    }

    /// Refill the padding layer
    ///
    /// Cells are visited row-major. A cell draws the next filler letter when
    /// padding is random or when no word occupies it; otherwise its padding is
    /// blank. Hidden-message letters run out into blanks.
    pub fn recompute_padding<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut source = PaddingSource::new(self.random_padding, &self.hidden_message);
        for (cell, pad) in self.cells.iter().zip(self.padding.iter_mut()) {
            *pad = if self.random_padding || cell.is_none() {
                source.next_letter(rng)
            } else {
                None
            };
        }
    }
}

/// Supplies filler letters in consumption order
enum PaddingSource {
    /// Shuffled alphabet, reshuffled whenever it runs dry
    Random(Vec<u8>),
    /// Hidden message letters followed by blanks
    Message { letters: Vec<u8>, next: usize },
}

impl PaddingSource {
    fn new(random: bool, message: &str) -> Self {
        if random {
            Self::Random(Vec::with_capacity(ALPHABET.len()))
        } else {
            Self::Message {
                letters: normalize(message).into_bytes(),
                next: 0,
            }
        }
    }

    fn next_letter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u8> {
        match self {
            Self::Random(pool) => {
                if pool.is_empty() {
                    pool.extend_from_slice(ALPHABET);
                    pool.shuffle(rng);
                }
                pool.pop()
            }
            Self::Message { letters, next } => {
                let letter = letters.get(*next).copied();
                *next += 1;
                letter
            }
        }
    }
}
