//! The [`Cell`] type — one grid square's simulation state.

/// State of a single grid square.
///
/// Plain value data: a cell's identity is its (row, column) position in the
/// [`LifeGrid`](crate::LifeGrid), and cells are mutated in place each
/// generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Whether the cell is currently alive.
    pub alive: bool,
    /// Alive cells among the up to eight surrounding positions, as of the
    /// last [`compute_neighbor_counts`](crate::LifeGrid::compute_neighbor_counts).
    /// Always in `0..=8`.
    pub live_neighbors: u8,
}

impl Cell {
    /// An alive cell with no recorded neighbors.
    pub const ALIVE: Self = Self {
        alive: true,
        live_neighbors: 0,
    };

    /// A dead cell with no recorded neighbors.
    pub const DEAD: Self = Self {
        alive: false,
        live_neighbors: 0,
    };
}
