//! Board pixel geometry: tile placement and input hit-testing.
//!
//! [`TileLayout`] bundles the board's pixel parameters and exposes the
//! forward tile-placement function and its inverse. Both are pure functions
//! of the stored parameters: the layout holds no grid state and the grid
//! holds no pixels, so each side is testable on its own and the embedding
//! renderer supplies whatever concrete geometry it uses.

/// Pixel geometry of a board of `rows × cols` tiles.
///
/// The board occupies the rectangle from `(origin_x, origin_y)` extending
/// `board_width × board_height` points. Tiles are separated from each other
/// and from the board edge by `margin` points on each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub board_width: f64,
    pub board_height: f64,
    pub margin: f64,
    pub rows: i32,
    pub cols: i32,
}

impl TileLayout {
    /// Bundle board geometry parameters into a layout.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        origin_x: f64,
        origin_y: f64,
        board_width: f64,
        board_height: f64,
        margin: f64,
        rows: i32,
        cols: i32,
    ) -> Self {
        Self {
            origin_x,
            origin_y,
            board_width,
            board_height,
            margin,
            rows,
            cols,
        }
    }

    /// Pixel size of one tile: the board extent divided evenly between the
    /// tiles, minus the margin.
    #[inline]
    pub fn tile_size(&self) -> (f64, f64) {
        (
            self.board_width / self.cols as f64 - self.margin,
            self.board_height / self.rows as f64 - self.margin,
        )
    }

    /// Pixel origin of the tile at (row, col): the board origin plus the
    /// leading margin plus the per-index tile stride. The forward layout
    /// function used by the renderer to place tile visuals.
    #[inline]
    pub fn tile_origin(&self, row: i32, col: i32) -> (f64, f64) {
        let (tile_w, tile_h) = self.tile_size();
        (
            self.origin_x + self.margin + col as f64 * (tile_w + self.margin),
            self.origin_y + self.margin + row as f64 * (tile_h + self.margin),
        )
    }

    /// Map a point to the cell containing it, or `None` for any point
    /// outside the board rectangle. Never panics.
    ///
    /// Inverse of [`tile_origin`](Self::tile_origin):
    /// `row = floor((y - origin_y) / board_height * rows)` and likewise for
    /// columns, valid only when the result lands in
    /// `[0, rows) × [0, cols)`.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(i32, i32)> {
        if self.rows <= 0 || self.cols <= 0 || self.board_width <= 0.0 || self.board_height <= 0.0 {
            return None;
        }
        let row = ((y - self.origin_y) / self.board_height * self.rows as f64).floor();
        let col = ((x - self.origin_x) / self.board_width * self.cols as f64).floor();
        // NaN fails both comparisons and falls through to None.
        if row >= 0.0 && row < self.rows as f64 && col >= 0.0 && col < self.cols as f64 {
            Some((row as i32, col as i32))
        } else {
            None
        }
    }
}
