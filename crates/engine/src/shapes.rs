//! Shapes module - rotation-state and wall-kick offset tables
//!
//! For each shape, an ordered list of rotation states; each state is four
//! `(x, y)` offsets from the pivot, in cell units with y growing downward.
//! Index 1 of every state is the pivot offset `(0, 0)` by convention.
//!
//! Wall-kick candidates follow the Super Rotation System. Kick y-values use
//! the SRS table convention (y up) and must be negated when applied to
//! screen space.
//! Reference: https://tetris.wiki/SRS

use gridfall_types::Shape;

/// Offset of a single cell relative to the piece pivot, in cell units.
pub type Offset = (i32, i32);

/// One rotation state: four cell offsets, pivot at `PIVOT_INDEX`.
pub type RotationState = [Offset; 4];

/// Index of the pivot offset within every rotation state.
pub const PIVOT_INDEX: usize = 1;

const I_STATES: [RotationState; 4] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    [(1, 0), (0, 0), (-1, 0), (-2, 0)],
    [(0, 1), (0, 0), (0, -1), (0, -2)],
];

const J_STATES: [RotationState; 4] = [
    [(-1, -1), (0, 0), (-1, 0), (1, 0)],
    [(1, -1), (0, 0), (0, -1), (0, 1)],
    [(1, 1), (0, 0), (1, 0), (-1, 0)],
    [(-1, 1), (0, 0), (0, 1), (0, -1)],
];

const L_STATES: [RotationState; 4] = [
    [(1, -1), (0, 0), (-1, 0), (1, 0)],
    [(1, 1), (0, 0), (0, -1), (0, 1)],
    [(-1, 1), (0, 0), (1, 0), (-1, 0)],
    [(-1, -1), (0, 0), (0, 1), (0, -1)],
];

const O_STATES: [RotationState; 1] = [[(1, -1), (0, 0), (0, -1), (1, 0)]];

const S_STATES: [RotationState; 4] = [
    [(0, -1), (0, 0), (1, -1), (-1, 0)],
    [(1, 0), (0, 0), (1, 1), (0, -1)],
    [(0, 1), (0, 0), (-1, 1), (1, 0)],
    [(-1, 0), (0, 0), (-1, -1), (0, 1)],
];

const T_STATES: [RotationState; 4] = [
    [(-1, 0), (0, 0), (1, 0), (0, -1)],
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    [(1, 0), (0, 0), (-1, 0), (0, 1)],
    [(0, 1), (0, 0), (0, -1), (-1, 0)],
];

const Z_STATES: [RotationState; 4] = [
    [(-1, -1), (0, 0), (0, -1), (1, 0)],
    [(1, -1), (0, 0), (1, 0), (0, 1)],
    [(1, 1), (0, 0), (0, 1), (-1, 0)],
    [(-1, 1), (0, 0), (-1, 0), (0, -1)],
];

/// Rotation states for a shape, in clockwise order.
pub fn rotation_states(shape: Shape) -> &'static [RotationState] {
    match shape {
        Shape::I => &I_STATES,
        Shape::J => &J_STATES,
        Shape::L => &L_STATES,
        Shape::O => &O_STATES,
        Shape::S => &S_STATES,
        Shape::T => &T_STATES,
        Shape::Z => &Z_STATES,
    }
}

/// Clockwise kick candidates shared by J, L, S, T and Z, indexed by the
/// rotation the piece is leaving (0->1, 1->2, 2->3, 3->0).
const JLSTZ_KICKS: [[Offset; 5]; 4] = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// Clockwise kick candidates for the I piece.
const I_KICKS: [[Offset; 5]; 4] = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// The O piece never kicks.
const O_KICKS: [[Offset; 1]; 1] = [[(0, 0)]];

/// Wall-kick candidates for leaving `from_rotation`, in trial order. The
/// first candidate is always the null offset (the unkicked rotation).
pub fn kicks(shape: Shape, from_rotation: usize) -> &'static [Offset] {
    match shape {
        Shape::O => &O_KICKS[0],
        Shape::I => &I_KICKS[from_rotation],
        _ => &JLSTZ_KICKS[from_rotation],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_shapes() -> [Shape; 7] {
        [
            Shape::I,
            Shape::J,
            Shape::L,
            Shape::O,
            Shape::S,
            Shape::T,
            Shape::Z,
        ]
    }

    #[test]
    fn pivot_offset_is_zero_in_every_state() {
        for shape in all_shapes() {
            for state in rotation_states(shape) {
                assert_eq!(state[PIVOT_INDEX], (0, 0), "{:?}", shape);
            }
        }
    }

    #[test]
    fn states_have_four_distinct_cells() {
        for shape in all_shapes() {
            for state in rotation_states(shape) {
                for i in 0..4 {
                    for j in i + 1..4 {
                        assert_ne!(state[i], state[j], "{:?} {:?}", shape, state);
                    }
                }
            }
        }
    }

    #[test]
    fn o_has_one_state_others_have_four() {
        for shape in all_shapes() {
            let expected = if shape == Shape::O { 1 } else { 4 };
            assert_eq!(rotation_states(shape).len(), expected, "{:?}", shape);
        }
    }

    #[test]
    fn successive_states_are_clockwise_rotations() {
        // Clockwise in screen space (y down): (x, y) -> (-y, x).
        for shape in all_shapes() {
            let states = rotation_states(shape);
            if states.len() < 2 {
                continue;
            }
            for (i, state) in states.iter().enumerate() {
                let next = states[(i + 1) % states.len()];
                for (k, &(x, y)) in state.iter().enumerate() {
                    assert_eq!(next[k], (-y, x), "{:?} state {}", shape, i);
                }
            }
        }
    }

    #[test]
    fn kick_tables_start_with_null_offset() {
        for shape in all_shapes() {
            let transitions = rotation_states(shape).len();
            for from in 0..transitions {
                let candidates = kicks(shape, from);
                assert_eq!(candidates[0], (0, 0));
                let expected = if shape == Shape::O { 1 } else { 5 };
                assert_eq!(candidates.len(), expected);
            }
        }
    }
}
