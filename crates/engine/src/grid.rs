//! Grid module - spatial predicates over the committed cell set
//!
//! All predicates are atomic any-cell-fails tests: a move is rejected unless
//! every cell of the piece passes.
//!
//! The boundary model is deliberately asymmetric: x is bounded to
//! `[-CELL_WIDTH, CANVAS_WIDTH)` while y only enforces `y < CANVAS_HEIGHT`.
//! There is no ceiling check; spawn-overlap detection covers the top of the
//! board instead.

use gridfall_types::{Axis, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_HEIGHT, CELL_WIDTH};

use crate::piece::Cell;

/// Position of `cell` after shifting it by `offset` pixels along `axis`.
pub fn shifted(cell: &Cell, offset: i32, axis: Axis) -> (i32, i32) {
    match axis {
        Axis::X => (cell.x + offset, cell.y),
        Axis::Y => (cell.x, cell.y + offset),
    }
}

/// True when shifting any of `cells` by `offset` along `axis` would land on
/// a position already present in `blocks`.
pub fn occupied_near(cells: &[Cell], blocks: &[Cell], offset: i32, axis: Axis) -> bool {
    cells.iter().any(|cell| {
        let (x, y) = shifted(cell, offset, axis);
        blocks.iter().any(|b| b.x == x && b.y == y)
    })
}

/// True when shifting any of `cells` by `offset` along `axis` would leave
/// the playfield bounds.
pub fn out_of_bounds(cells: &[Cell], offset: i32, axis: Axis) -> bool {
    cells.iter().any(|cell| {
        let (x, y) = shifted(cell, offset, axis);
        match axis {
            Axis::X => x < -CELL_WIDTH || x >= CANVAS_WIDTH,
            Axis::Y => y >= CANVAS_HEIGHT,
        }
    })
}

/// True when `cells` may not rest where they are: overlapping a committed
/// cell or outside bounds on either axis.
pub fn placement_blocked(cells: &[Cell], blocks: &[Cell]) -> bool {
    occupied_near(cells, blocks, 0, Axis::X)
        || out_of_bounds(cells, 0, Axis::X)
        || out_of_bounds(cells, 0, Axis::Y)
}

/// True when any cell sits directly above the floor or a committed cell;
/// this is the settle test for naturally falling pieces.
pub fn supported(cells: &[Cell], blocks: &[Cell]) -> bool {
    cells.iter().any(|cell| {
        let below = cell.y + CELL_HEIGHT;
        below >= CANVAS_HEIGHT || blocks.iter().any(|b| b.x == cell.x && b.y == below)
    })
}
