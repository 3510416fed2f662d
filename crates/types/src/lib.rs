//! Shared types module - constants and closed enumerations
//!
//! Pure data with no dependencies, usable from the engine, the input layer,
//! and the renderer alike.
//!
//! # Playfield geometry
//!
//! The engine works in pixel units aligned to a fixed cell size:
//!
//! - **Canvas**: 200 x 400 pixels
//! - **Grid**: 10 columns x 20 rows
//! - **Cell**: 20 x 20 pixels
//!
//! Horizontal positions are valid in `[-CELL_WIDTH, CANVAS_WIDTH)`; the
//! vertical predicate only enforces `y < CANVAS_HEIGHT` (pieces may spawn
//! partially above the visible area). Both asymmetries are intentional.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_RATE_MS` | 16 | Fixed simulation step (~60 FPS) |
//! | `DROP_PERIODS_MS[0]` | 500 | Gravity at level 0 |
//! | `DROP_PERIODS_MS[29]` | 40 | Gravity floor (level clamped to 29) |

/// Playfield width in pixels.
pub const CANVAS_WIDTH: i32 = 200;

/// Playfield height in pixels.
pub const CANVAS_HEIGHT: i32 = 400;

/// Grid width in cells (10 columns).
pub const GRID_WIDTH: i32 = 10;

/// Grid height in cells (20 rows).
pub const GRID_HEIGHT: i32 = 20;

/// Width of one grid cell in pixels.
pub const CELL_WIDTH: i32 = CANVAS_WIDTH / GRID_WIDTH;

/// Height of one grid cell in pixels.
pub const CELL_HEIGHT: i32 = CANVAS_HEIGHT / GRID_HEIGHT;

/// Fixed simulation step interval in milliseconds (~60 FPS).
pub const TICK_RATE_MS: u64 = 16;

/// Points awarded per cleared row in a single clear event.
pub const POINTS_PER_LINE: u32 = 100;

/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Canonical spawn position for the active piece (pivot pixel coordinates).
pub const SPAWN_POSITION: (i32, i32) = (CANVAS_WIDTH / 2 - CELL_WIDTH, CELL_HEIGHT);

/// Pivot position for the next-piece preview surface.
pub const PREVIEW_POSITION: (i32, i32) = (2 * CELL_WIDTH, 2 * CELL_HEIGHT);

/// Pivot position for the hold preview surface.
pub const HOLD_POSITION: (i32, i32) = (2 * CELL_WIDTH, 2 * CELL_HEIGHT);

/// Delayed auto shift: milliseconds a movement key must be held before it
/// starts repeating.
pub const DEFAULT_DAS_MS: u32 = 150;

/// Auto repeat rate: milliseconds between repeats once DAS has expired.
pub const DEFAULT_ARR_MS: u32 = 40;

/// Soft drop repeats immediately.
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop repeat interval.
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// Gravity period per level in milliseconds, 30 entries.
///
/// The gravity clock is re-armed from this table whenever the engine reports
/// a level change. Levels at or above 29 stay at the final entry.
pub const DROP_PERIODS_MS: [u64; 30] = [
    500, 470, 440, 410, 380, 355, 330, 305, 280, 260, //
    240, 220, 200, 185, 170, 155, 140, 130, 120, 110, //
    100, 92, 84, 76, 70, 64, 58, 52, 46, 40,
];

/// Look up the gravity period for a level, clamped to the table range.
pub fn drop_period_ms(level: u32) -> u64 {
    DROP_PERIODS_MS[level.min(29) as usize]
}

/// The seven tetromino shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Shape {
    /// Map a shape index in `[0, 7)` (the range of the RNG scale step) to a
    /// shape. The ordering is fixed; changing it changes every piece
    /// sequence.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Shape::I,
            1 => Shape::J,
            2 => Shape::L,
            3 => Shape::O,
            4 => Shape::S,
            5 => Shape::T,
            _ => Shape::Z,
        }
    }

    /// Display color for cells of this shape.
    pub fn color(&self) -> BlockColor {
        match self {
            Shape::I => BlockColor::Cyan,
            Shape::J => BlockColor::Blue,
            Shape::L => BlockColor::Orange,
            Shape::O => BlockColor::Yellow,
            Shape::S => BlockColor::Green,
            Shape::T => BlockColor::Purple,
            Shape::Z => BlockColor::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::J => "J",
            Shape::L => "L",
            Shape::O => "O",
            Shape::S => "S",
            Shape::T => "T",
            Shape::Z => "Z",
        }
    }
}

/// Display color of a cell. Ghost cells are always grey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
    Grey,
}

/// Movement axis for `Action::Move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// The closed set of engine actions.
///
/// Input and timer sources each produce these; the scheduler serializes them
/// into one ordered stream folded over the state, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Periodic simulation step: line-clear resolution, piece promotion,
    /// ghost projection, game-over detection, preview advance.
    Tick { time_ms: u64 },
    /// Shift the active piece by `offset` pixels along `axis`.
    Move { axis: Axis, offset: i32 },
    /// Rotate the active piece clockwise, with wall-kick fallback.
    Rotate,
    /// Stash or swap the active piece with the hold slot.
    Hold,
    /// Instantly settle the active piece at its ghost position.
    Drop,
    /// Periodic settle check for naturally falling pieces.
    Collision,
}
