//! State module - the immutable snapshot and the transition engine
//!
//! The snapshot is created once and thereafter only replaced wholesale by a
//! transition; every transition consumes one snapshot and produces the next.
//! Rejected operations (a move into a wall, a rotation with no fitting kick,
//! a hold while the gate is closed) return the input unchanged.

use arrayvec::ArrayVec;

use gridfall_types::{
    Action, Axis, BlockColor, CANVAS_HEIGHT, CELL_HEIGHT, CELL_WIDTH, GRID_WIDTH, HOLD_POSITION,
    LINES_PER_LEVEL, POINTS_PER_LINE, PREVIEW_POSITION, SPAWN_POSITION,
};

use crate::grid::{occupied_near, out_of_bounds, placement_blocked, supported};
use crate::piece::{spawn, Cell, Piece};
use crate::rng::hash;
use crate::shapes::{kicks, rotation_states, PIVOT_INDEX};

/// Ghost cells reuse their source cell ids offset into a reserved range so
/// they never collide with board ids.
const GHOST_ID_BASE: u32 = 1 << 30;

/// The authoritative game state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Settled cells, append-ordered; never two cells at the same position.
    pub blocks: Vec<Cell>,
    /// The falling piece, absent only before the first tick. Once its
    /// `collided` flag is set it is replaced on the next tick.
    pub current: Option<Piece>,
    /// Preview of the piece that will be promoted next.
    pub next: Piece,
    pub held: Option<Piece>,
    /// Grey projection of where the current piece would land.
    pub ghost: Option<Piece>,
    /// Monotonic cell-id counter; advances by 4 per spawned piece.
    pub block_count: u32,
    pub line_clears: u32,
    pub level: u32,
    pub points: u32,
    /// Running maximum of `points`, carried across restarts.
    pub highscore: u32,
    /// Cells removed by the latest clear event; drained by the render loop.
    pub cleared_blocks: Vec<Cell>,
    /// Seed for the next RNG draw; advances only through the hash step.
    pub seed: u32,
    pub game_end: bool,
    pub can_hold_again: bool,
    /// Pulses true on the transition where the level actually increases.
    pub change_in_level: bool,
}

impl State {
    /// Fresh initial snapshot for an injected seed. The first preview is
    /// drawn immediately; the first tick promotes it into play.
    pub fn new(seed: u32) -> Self {
        let preview_seed = hash(seed);
        let next = spawn(
            PREVIEW_POSITION.0,
            PREVIEW_POSITION.1,
            0,
            preview_seed,
            true,
            &[],
        );
        Self {
            blocks: Vec::new(),
            current: None,
            next,
            held: None,
            ghost: None,
            block_count: 4,
            line_clears: 0,
            level: 0,
            points: 0,
            highscore: 0,
            cleared_blocks: Vec::new(),
            seed: preview_seed,
            game_end: false,
            can_hold_again: true,
            change_in_level: false,
        }
    }

    /// Cold restart: a fresh snapshot with the seed advanced once more and
    /// only the high score carried forward.
    pub fn restart(&self) -> Self {
        let mut fresh = Self::new(hash(self.seed));
        fresh.highscore = self.highscore;
        fresh
    }

    /// Fold one action into the state, producing the next snapshot.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Tick { .. } => self.tick(),
            Action::Move { axis, offset } => self.move_current(axis, offset),
            Action::Rotate => self.rotate(),
            Action::Hold => self.hold(),
            Action::Drop => self.hard_drop(),
            Action::Collision => self.collide(),
        }
    }

    /// Consume the transient cleared-cell list after rendering.
    pub fn drain_cleared(mut self) -> Self {
        self.cleared_blocks.clear();
        self
    }

    /// Simulation step. In order: line-clear resolution, promotion of the
    /// preview when the slot needs refilling, spawn-overlap game-over
    /// detection, preview advance, ghost projection.
    fn tick(mut self) -> Self {
        self = self.resolve_lines();

        let needs_spawn = match &self.current {
            None => true,
            Some(piece) => piece.collided,
        };

        if needs_spawn {
            let promoted = spawn(
                SPAWN_POSITION.0,
                SPAWN_POSITION.1,
                self.block_count,
                self.next.seed,
                false,
                &self.blocks,
            );
            if occupied_near(&promoted.cells, &self.blocks, 0, Axis::X) {
                self.game_end = true;
            }

            let preview_seed = hash(self.seed);
            self.next = spawn(
                PREVIEW_POSITION.0,
                PREVIEW_POSITION.1,
                self.block_count + 4,
                preview_seed,
                true,
                &self.blocks,
            );
            self.current = Some(promoted);
            self.block_count += 8;
            self.seed = preview_seed;
        }

        self.ghost = self.project_ghost();
        self
    }

    /// Shift the current piece, or do nothing when the shift would overlap
    /// a committed cell or leave the bounds.
    fn move_current(mut self, axis: Axis, offset: i32) -> Self {
        let Some(current) = &self.current else {
            return self;
        };
        if current.collided {
            return self;
        }
        if occupied_near(&current.cells, &self.blocks, offset, axis)
            || out_of_bounds(&current.cells, offset, axis)
        {
            return self;
        }
        self.current = Some(current.shifted(offset, axis));
        self
    }

    /// Rotate the current piece clockwise around its pivot, trying each
    /// wall-kick candidate in table order; reject the rotation outright when
    /// none fits. Kick y-offsets are table-space and applied negated.
    fn rotate(mut self) -> Self {
        let Some(current) = &self.current else {
            return self;
        };
        if current.collided {
            return self;
        }

        let states = rotation_states(current.shape);
        let next_rotation = (current.rotation + 1) % states.len();
        let offsets = states[next_rotation];
        let (px, py) = (current.origin.x, current.origin.y);

        let mut rotated = current.cells;
        for (i, &(dx, dy)) in offsets.iter().enumerate() {
            rotated[i] = Cell {
                x: px + dx * CELL_WIDTH,
                y: py + dy * CELL_HEIGHT,
                ..rotated[i]
            };
        }

        for &(kx, ky) in kicks(current.shape, current.rotation) {
            let mut candidate = rotated;
            for cell in &mut candidate {
                cell.x += kx * CELL_WIDTH;
                cell.y -= ky * CELL_HEIGHT;
            }
            if !placement_blocked(&candidate, &self.blocks) {
                self.current = Some(Piece {
                    cells: candidate,
                    rotation: next_rotation,
                    origin: candidate[PIVOT_INDEX],
                    ..*current
                });
                return self;
            }
        }

        self
    }

    /// Stash the current piece. With an empty hold slot the preview is
    /// promoted and a replacement preview drawn off a double hash (skipping
    /// the seed value the promotion just consumed); with an occupied slot
    /// the two pieces swap with no seed or id movement. Either way the hold
    /// gate closes until the next collision.
    fn hold(mut self) -> Self {
        if !self.can_hold_again {
            return self;
        }
        let Some(current) = &self.current else {
            return self;
        };
        if current.collided {
            return self;
        }

        let stashed = spawn(
            HOLD_POSITION.0,
            HOLD_POSITION.1,
            current.block_start_count,
            current.seed,
            true,
            &self.blocks,
        );

        match &self.held {
            None => {
                let promoted = spawn(
                    SPAWN_POSITION.0,
                    SPAWN_POSITION.1,
                    self.next.block_start_count,
                    self.next.seed,
                    false,
                    &self.blocks,
                );
                let preview_seed = hash(hash(self.seed));
                self.next = spawn(
                    PREVIEW_POSITION.0,
                    PREVIEW_POSITION.1,
                    self.block_count,
                    preview_seed,
                    true,
                    &self.blocks,
                );
                self.current = Some(promoted);
                self.block_count += 4;
                self.seed = preview_seed;
            }
            Some(held) => {
                let promoted = spawn(
                    SPAWN_POSITION.0,
                    SPAWN_POSITION.1,
                    held.block_start_count,
                    held.seed,
                    false,
                    &self.blocks,
                );
                self.current = Some(promoted);
            }
        }

        self.held = Some(stashed);
        self.can_hold_again = false;
        self
    }

    /// Snap the current piece onto its ghost position and settle it there.
    fn hard_drop(mut self) -> Self {
        let Some(current) = &self.current else {
            return self;
        };
        if current.collided {
            return self;
        }
        let Some(ghost) = &self.ghost else {
            return self;
        };

        let mut cells = current.cells;
        for (cell, target) in cells.iter_mut().zip(ghost.cells.iter()) {
            cell.x = target.x;
            cell.y = target.y;
        }

        let settled = Piece {
            cells,
            origin: cells[PIVOT_INDEX],
            collided: true,
            ..*current
        };
        self.blocks.extend_from_slice(&settled.cells);
        self.current = Some(settled);
        self.can_hold_again = true;
        self.seed = hash(self.seed);
        self
    }

    /// Settle check: when any cell of the current piece rests directly on
    /// the floor or a committed cell, mark it collided and merge its cells
    /// into the board.
    fn collide(mut self) -> Self {
        let Some(current) = &self.current else {
            return self;
        };
        if current.collided {
            return self;
        }
        if !supported(&current.cells, &self.blocks) {
            return self;
        }

        let settled = Piece {
            collided: true,
            ..*current
        };
        self.blocks.extend_from_slice(&settled.cells);
        self.current = Some(settled);
        self.can_hold_again = true;
        self.seed = hash(self.seed);
        self
    }

    /// Line-clear resolution, run at the start of every tick. Only rows
    /// touched by the just-collided piece can have filled; full rows are
    /// removed, rows above compact downward by the number of cleared rows
    /// below them, and scoring/level bookkeeping updates.
    fn resolve_lines(mut self) -> Self {
        self.change_in_level = false;

        let Some(current) = &self.current else {
            return self;
        };
        if !current.collided {
            return self;
        }

        let mut rows: ArrayVec<i32, 4> = ArrayVec::new();
        for cell in &current.cells {
            if !rows.contains(&cell.y) {
                rows.push(cell.y);
            }
        }

        let mut full_rows: ArrayVec<i32, 4> = ArrayVec::new();
        for &row in &rows {
            let count = self.blocks.iter().filter(|b| b.y == row).count();
            if count == GRID_WIDTH as usize {
                full_rows.push(row);
            }
        }
        if full_rows.is_empty() {
            return self;
        }

        let mut cleared = Vec::with_capacity(full_rows.len() * GRID_WIDTH as usize);
        let mut kept = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            if full_rows.contains(&block.y) {
                cleared.push(*block);
            } else {
                let rows_below = full_rows.iter().filter(|&&row| row > block.y).count() as i32;
                kept.push(Cell {
                    y: block.y + rows_below * CELL_HEIGHT,
                    ..*block
                });
            }
        }

        let cleared_count = full_rows.len() as u32;
        self.points += POINTS_PER_LINE * cleared_count;
        self.line_clears += cleared_count;
        let level = self.line_clears / LINES_PER_LEVEL;
        self.change_in_level = level > self.level;
        self.level = level;
        self.highscore = self.highscore.max(self.points);
        self.blocks = kept;
        self.cleared_blocks = cleared;
        self
    }

    /// Project the current piece straight down onto the stack.
    ///
    /// Per column the lowest free row is found by scanning committed cells
    /// strictly below the piece's topmost cell in that column; the smallest
    /// per-cell offset wins. When the raw projection itself cannot rest
    /// (blocked or out of bounds) it is nudged up one cell as a corrective
    /// fallback; this is a known heuristic, not a general solver.
    fn project_ghost(&self) -> Option<Piece> {
        let current = self.current.as_ref()?;
        if current.collided {
            return None;
        }

        let mut offset = i32::MAX;
        for cell in &current.cells {
            let column_top = current
                .cells
                .iter()
                .filter(|c| c.x == cell.x)
                .map(|c| c.y)
                .min()
                .unwrap_or(cell.y);
            let obstacle = self
                .blocks
                .iter()
                .filter(|b| b.x == cell.x && b.y > column_top)
                .map(|b| b.y)
                .min()
                .unwrap_or(CANVAS_HEIGHT);
            offset = offset.min(obstacle - CELL_HEIGHT - cell.y);
        }

        let mut cells = current.cells;
        for cell in &mut cells {
            cell.id += GHOST_ID_BASE;
            cell.y += offset;
            cell.color = BlockColor::Grey;
        }
        if placement_blocked(&cells, &self.blocks) {
            for cell in &mut cells {
                cell.y -= CELL_HEIGHT;
            }
        }

        Some(Piece {
            cells,
            origin: cells[PIVOT_INDEX],
            ..*current
        })
    }
}
