//! Piece module - cells, tetromino instances, and the spawn factory
//!
//! Cells and pieces are immutable value objects. Every transform produces a
//! new value; cell ids are assigned only at spawn time and preserved through
//! moves and rotations so a renderer can correlate cells across snapshots.

use gridfall_types::{Axis, BlockColor, Shape, CELL_HEIGHT, CELL_WIDTH};

use crate::grid::occupied_near;
use crate::rng::shape_for;
use crate::shapes::{rotation_states, PIVOT_INDEX};

/// A unit grid square in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Stable identity, used only to correlate a cell across snapshots.
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub color: BlockColor,
}

impl Cell {
    /// The cell shifted by `offset` pixels along `axis`, identity preserved.
    pub fn shifted(&self, offset: i32, axis: Axis) -> Cell {
        match axis {
            Axis::X => Cell {
                x: self.x + offset,
                ..*self
            },
            Axis::Y => Cell {
                y: self.y + offset,
                ..*self
            },
        }
    }
}

/// A tetromino instance: four cells plus rotation bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub cells: [Cell; 4],
    pub shape: Shape,
    /// Index into this shape's rotation-state table.
    pub rotation: usize,
    /// The pivot cell used as the rotation center.
    pub origin: Cell,
    /// Set once the piece has come to rest and been merged into the board.
    pub collided: bool,
    /// The seed that generated this piece; spawning with the same seed
    /// reproduces the same shape.
    pub seed: u32,
    /// First cell id of this piece; cells use ids `start..start + 4`.
    pub block_start_count: u32,
}

impl Piece {
    /// The piece shifted by `offset` pixels along `axis`; cell ids and the
    /// pivot follow along unchanged.
    pub fn shifted(&self, offset: i32, axis: Axis) -> Piece {
        let mut cells = self.cells;
        for cell in &mut cells {
            *cell = cell.shifted(offset, axis);
        }
        Piece {
            cells,
            origin: self.origin.shifted(offset, axis),
            ..*self
        }
    }
}

/// Spawn a new piece with its pivot at `(x, y)`.
///
/// The shape is drawn from the seed and laid out with its zero-rotation
/// offsets. Non-preview spawns that would land on occupied cells fall back
/// to `y = 0` so the piece visibly starts at the top of the board instead of
/// overlapping; the later spawn-overlap check turns an unresolvable overlap
/// into game over.
pub fn spawn(x: i32, y: i32, id_counter: u32, seed: u32, is_preview: bool, blocks: &[Cell]) -> Piece {
    let shape = shape_for(seed);
    let offsets = rotation_states(shape)[0];
    let color = shape.color();

    let build = |pivot_y: i32| -> [Cell; 4] {
        let mut cells = [Cell {
            id: 0,
            x: 0,
            y: 0,
            color,
        }; 4];
        for (i, &(dx, dy)) in offsets.iter().enumerate() {
            cells[i] = Cell {
                id: id_counter + i as u32,
                x: x + dx * CELL_WIDTH,
                y: pivot_y + dy * CELL_HEIGHT,
                color,
            };
        }
        cells
    };

    let mut cells = build(y);
    if !is_preview && occupied_near(&cells, blocks, 0, Axis::X) {
        cells = build(0);
    }

    Piece {
        cells,
        shape,
        rotation: 0,
        origin: cells[PIVOT_INDEX],
        collided: false,
        seed,
        block_start_count: id_counter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_builds_four_cells_with_sequential_ids() {
        let piece = spawn(80, 20, 12, 0, false, &[]);
        let ids: Vec<u32> = piece.cells.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![12, 13, 14, 15]);
        assert_eq!(piece.block_start_count, 12);
        assert_eq!(piece.rotation, 0);
        assert!(!piece.collided);
    }

    #[test]
    fn spawn_pivot_sits_exactly_at_requested_position() {
        let piece = spawn(80, 20, 0, 0, false, &[]);
        assert_eq!((piece.origin.x, piece.origin.y), (80, 20));
        assert!(piece
            .cells
            .iter()
            .any(|c| c.x == 80 && c.y == 20 && c.id == piece.origin.id));
    }

    #[test]
    fn spawn_same_seed_same_shape() {
        let a = spawn(80, 20, 0, 987_654, false, &[]);
        let b = spawn(40, 40, 100, 987_654, true, &[]);
        assert_eq!(a.shape, b.shape);
    }

    #[test]
    fn occupied_spawn_falls_back_to_top_of_board() {
        // Seed 0 is an I piece: one row of four cells through the pivot.
        let normal = spawn(80, 20, 0, 0, false, &[]);
        let blocks = normal.cells;

        let fallback = spawn(80, 20, 4, 0, false, &blocks);
        assert!(fallback.cells.iter().all(|c| c.y == 0));

        // Preview spawns never adjust.
        let preview = spawn(80, 20, 8, 0, true, &blocks);
        assert!(preview.cells.iter().all(|c| c.y == 20));
    }

    #[test]
    fn shifted_preserves_ids_and_moves_pivot() {
        let piece = spawn(80, 20, 0, 0, false, &[]);
        let moved = piece.shifted(CELL_WIDTH, Axis::X);
        assert_eq!(moved.origin.x, piece.origin.x + CELL_WIDTH);
        assert_eq!(moved.origin.y, piece.origin.y);
        for (a, b) in piece.cells.iter().zip(moved.cells.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.x + CELL_WIDTH, b.x);
        }
    }
}
