//! Seed patterns parsed from ASCII art.
//!
//! A [`Pattern`] is a rectangular block of `'#'` (alive) and `'.'` (dead)
//! characters that can be stamped onto a [`LifeGrid`]. The [`presets`]
//! module collects the classic small patterns.

use std::fmt;

use crate::grid::LifeGrid;

/// A rectangular seed pattern built from text.
///
/// Lines are separated by `'\n'` and must all have the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    content: String,
    rows: i32,
    cols: i32,
}

impl Pattern {
    /// Parse a pattern from text.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Only `'#'` and `'.'` are allowed.
    pub fn new(s: &str) -> Result<Self, PatternError> {
        let s = s.trim();
        let mut col: i32 = 0;
        let mut row: i32 = 0;
        let mut width: i32 = -1;

        for ch in s.chars() {
            if ch == '\n' {
                if width >= 0 && col != width {
                    return Err(PatternError::InconsistentSize(s.to_string()));
                }
                width = col;
                col = 0;
                row += 1;
                continue;
            }
            if ch != '#' && ch != '.' {
                return Err(PatternError::InvalidRune { ch, row, col });
            }
            col += 1;
        }
        if width >= 0 && col != width {
            return Err(PatternError::InconsistentSize(s.to_string()));
        }

        let cols = if width >= 0 { width } else { col };
        let rows = if col > 0 || row > 0 { row + 1 } else { 0 };
        Ok(Self {
            content: s.to_string(),
            rows,
            cols,
        })
    }

    /// Height of the pattern in cells.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Width of the pattern in cells.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The pattern's textual content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Visit every position with its alive flag, row-major.
    pub fn iter(&self, mut f: impl FnMut(i32, i32, bool)) {
        let mut col: i32 = 0;
        let mut row: i32 = 0;
        for ch in self.content.chars() {
            if ch == '\n' {
                col = 0;
                row += 1;
                continue;
            }
            f(row, col, ch == '#');
            col += 1;
        }
    }

    /// Stamp the pattern's alive cells onto `grid`, its top-left corner at
    /// (row, col).
    ///
    /// Dead pattern cells leave the grid untouched (overlay semantics), and
    /// cells falling outside the grid are clipped. Returns the number of
    /// grid cells actually set alive.
    pub fn stamp(&self, grid: &mut LifeGrid, row: i32, col: i32) -> usize {
        let mut stamped = 0;
        self.iter(|dr, dc, alive| {
            if alive && grid.set_alive(row + dr, col + dc, true).is_ok() {
                stamped += 1;
            }
        });
        stamped
    }
}

// ---------------------------------------------------------------------------
// PatternError
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `'#'` or `'.'` was found.
    InvalidRune { ch: char, row: i32, col: i32 },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "pattern has inconsistent line widths:\n{s}"),
            Self::InvalidRune { ch, row, col } => {
                write!(
                    f,
                    "pattern contains invalid character \u{201c}{ch}\u{201d} at ({row}, {col})"
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Classic small patterns, ready for [`Pattern::new`].
pub mod presets {
    /// 2x2 still life.
    pub const BLOCK: &str = "\
##
##";

    /// Period-2 oscillator.
    pub const BLINKER: &str = "###";

    /// Period-2 oscillator.
    pub const TOAD: &str = "\
.###
###.";

    /// Period-2 oscillator.
    pub const BEACON: &str = "\
##..
##..
..##
..##";

    /// The smallest spaceship; moves one cell diagonally every four
    /// generations.
    pub const GLIDER: &str = "\
.#.
..#
###";
}
