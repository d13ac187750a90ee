//! The [`LifeGrid`] type — a fixed-size Game of Life board.
//!
//! The grid owns a flat row-major buffer of [`Cell`]s. A generation advances
//! in two strict phases: neighbor counts are first computed for the whole
//! board from the pre-step alive flags, then the birth/survival rule is
//! applied from those counts. The phases are never fused, so no cell can
//! observe a half-updated neighborhood.

use std::fmt;

use rand::{Rng, RngExt};

use crate::cell::Cell;

/// Rows in a [`Default`] grid.
pub const DEFAULT_ROWS: i32 = 8;
/// Columns in a [`Default`] grid.
pub const DEFAULT_COLS: i32 = 10;

/// Row/column offsets of the eight Moore neighbors.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

// ---------------------------------------------------------------------------
// LifeGrid
// ---------------------------------------------------------------------------

/// A fixed-size Game of Life board with population and generation counters.
///
/// Dimensions are set at construction and never change. The board is finite
/// and non-toroidal: positions outside it are simply absent, never wrapped,
/// so edge and corner cells have fewer neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LifeGrid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
    generation: u64,
    population: usize,
}

impl LifeGrid {
    /// Create a grid of the given dimensions with every cell dead.
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is not
    /// positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            cells: vec![Cell::default(); rows as usize * cols as usize],
            rows,
            cols,
            generation: 0,
            population: 0,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Count of generations stepped so far. Starts at 0 and only ever
    /// increases, by exactly 1 per [`advance_generation`](Self::advance_generation).
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count of currently alive cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row >= 0 && col >= 0 && row < self.rows && col < self.cols {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    /// Whether (row, col) is on the board.
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// The cell at (row, col), or `None` out of bounds. Never panics.
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Whether the cell at (row, col) is alive. Out-of-bounds positions are
    /// absent, not alive.
    #[inline]
    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i].alive)
    }

    /// Flip the cell at (row, col) and return its new alive state.
    ///
    /// The population counter is adjusted by ±1 to stay consistent. An
    /// out-of-bounds request fails with [`GridError::OutOfBounds`] and
    /// changes nothing.
    pub fn toggle(&mut self, row: i32, col: i32) -> Result<bool, GridError> {
        let Some(i) = self.index(row, col) else {
            log::debug!(
                "toggle rejected: ({row}, {col}) outside {}x{} board",
                self.rows,
                self.cols
            );
            return Err(GridError::OutOfBounds { row, col });
        };
        let alive = !self.cells[i].alive;
        self.cells[i].alive = alive;
        if alive {
            self.population += 1;
        } else {
            self.population -= 1;
        }
        Ok(alive)
    }

    /// Set the cell at (row, col) to `alive`, keeping the population counter
    /// consistent. Setting a cell to its current state is a no-op.
    pub fn set_alive(&mut self, row: i32, col: i32, alive: bool) -> Result<(), GridError> {
        let i = self
            .index(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?;
        if self.cells[i].alive != alive {
            self.cells[i].alive = alive;
            if alive {
                self.population += 1;
            } else {
                self.population -= 1;
            }
        }
        Ok(())
    }

    /// Recompute `live_neighbors` for every cell from the current alive
    /// flags.
    ///
    /// This is the read phase of a step: it only reads `alive` and only
    /// writes `live_neighbors`, so the counts always reflect a single
    /// coherent board state.
    pub fn compute_neighbor_counts(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let mut count: u8 = 0;
                for (dr, dc) in NEIGHBOR_OFFSETS {
                    if self.is_alive(row + dr, col + dc) {
                        count += 1;
                    }
                }
                let i = row as usize * self.cols as usize + col as usize;
                self.cells[i].live_neighbors = count;
            }
        }
    }

    /// Step the simulation by one generation.
    ///
    /// Neighbor counts are computed for the whole board first, then every
    /// cell's fate follows from its count alone: exactly 3 alive neighbors
    /// means alive, fewer than 2 or more than 3 means dead, exactly 2 leaves
    /// the cell as it was. Population is recomputed and the generation
    /// counter increments by exactly 1. Never fails.
    pub fn advance_generation(&mut self) {
        self.compute_neighbor_counts();

        let mut alive = 0usize;
        for cell in &mut self.cells {
            match cell.live_neighbors {
                3 => cell.alive = true,
                n if n < 2 || n > 3 => cell.alive = false,
                _ => {} // exactly 2: unchanged
            }
            if cell.alive {
                alive += 1;
            }
        }
        self.population = alive;
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.population
        );
    }

    /// Kill every cell and reset the population to 0.
    ///
    /// The generation counter is untouched: clearing the board is not a
    /// simulation step.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.population = 0;
    }

    /// Re-seed the board with a random soup.
    ///
    /// Each cell becomes alive with probability `density` (clamped to
    /// `[0.0, 1.0]`), independently. Neighbor counts are reset and the
    /// population counter is recomputed.
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        let density = density.clamp(0.0, 1.0);
        let mut alive = 0usize;
        for cell in &mut self.cells {
            *cell = Cell::default();
            cell.alive = rng.random::<f64>() < density;
            if cell.alive {
                alive += 1;
            }
        }
        self.population = alive;
    }

    /// Row-major iterator over `(row, col, Cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / cols) as i32, (i % cols) as i32, cell))
    }
}

impl Default for LifeGrid {
    /// The original app's board: 8 rows by 10 columns, all dead.
    fn default() -> Self {
        Self {
            cells: vec![Cell::default(); (DEFAULT_ROWS * DEFAULT_COLS) as usize],
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            generation: 0,
            population: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Deserialization validates the board shape instead of trusting the input:
/// dimensions must be positive, the cell buffer must be exactly
/// `rows * cols` long, and the derived population counter is rebuilt from
/// the cells, so a hand-edited save cannot produce a grid whose counters
/// disagree with its contents or whose accessors index out of range.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LifeGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct RawGrid {
            cells: Vec<Cell>,
            rows: i32,
            cols: i32,
            generation: u64,
            #[serde(default)]
            population: usize,
        }

        let raw = RawGrid::deserialize(deserializer)?;
        if raw.rows <= 0 || raw.cols <= 0 {
            return Err(D::Error::custom(GridError::InvalidDimension {
                rows: raw.rows,
                cols: raw.cols,
            }));
        }
        let expected = raw.rows as usize * raw.cols as usize;
        if raw.cells.len() != expected {
            return Err(D::Error::custom(format!(
                "expected {expected} cells for a {}x{} grid, got {}",
                raw.rows,
                raw.cols,
                raw.cells.len()
            )));
        }
        let population = raw.cells.iter().filter(|cell| cell.alive).count();
        if population != raw.population {
            log::debug!(
                "stored population {} disagrees with cells; using {population}",
                raw.population
            );
        }
        Ok(Self {
            cells: raw.cells,
            rows: raw.rows,
            cols: raw.cols,
            generation: raw.generation,
            population,
        })
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors reported by [`LifeGrid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Construction with a non-positive dimension.
    InvalidDimension { rows: i32, cols: i32 },
    /// A cell coordinate outside `[0, rows) × [0, cols)`.
    OutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
