//! **lifegrid** — a fixed-size Conway's Game of Life board.
//!
//! This crate is the simulation core behind a tile-based Life app: the cell
//! grid with its strict two-phase generation step, population/generation
//! counters, ASCII seed patterns, and the pure pixel geometry used to place
//! tiles and hit-test taps. Rendering, input dispatch, and run/pause cadence
//! belong to the embedding application: it resolves a tap through
//! [`TileLayout::cell_at`] and calls [`LifeGrid::toggle`], steps the board
//! with [`LifeGrid::advance_generation`] on its own clock, and reads cell
//! state back to draw.
//!
//! ```
//! use lifegrid::{LifeGrid, Pattern, pattern::presets};
//!
//! let mut grid = LifeGrid::new(8, 10)?;
//! Pattern::new(presets::BLINKER)?.stamp(&mut grid, 3, 3);
//! grid.advance_generation();
//! assert_eq!(grid.population(), 3);
//! assert_eq!(grid.generation(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod grid;
pub mod layout;
pub mod pattern;

pub use cell::Cell;
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, GridError, LifeGrid};
pub use layout::TileLayout;
pub use pattern::{Pattern, PatternError};
