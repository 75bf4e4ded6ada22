//! Display-order maintenance for props.
//!
//! Props carry an integer `position` that is a soft ordering hint: values are
//! not required to be unique or contiguous. The visible contract is that all
//! listings sort by `(position ASC, id ASC)`. Moves are in-place rank swaps
//! with the adjacent prop, never a renumbering pass.

use serde::Deserialize;

use crate::entity::prop;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Position for a newly appended prop: one past the current maximum.
pub fn next_position(current_max: Option<i32>) -> i32 {
    current_max.unwrap_or(0) + 1
}

/// Plan an adjacent swap for the prop at `index` in the render-sorted list.
///
/// Returns the `(prop_id, new_position)` updates to persist, or `None` when
/// the prop is already at the boundary (a no-op, not an error). When both
/// props started with equal positions a plain swap would change nothing, so
/// the moved prop is nudged by one to break the tie.
pub fn plan_move(
    props: &[prop::Model],
    index: usize,
    direction: MoveDirection,
) -> Option<[(i32, i32); 2]> {
    let neighbor_index = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => {
            if index + 1 >= props.len() {
                return None;
            }
            index + 1
        }
    };

    let moved = &props[index];
    let neighbor = &props[neighbor_index];

    let mut moved_position = neighbor.position;
    let neighbor_position = moved.position;
    if moved_position == neighbor_position {
        moved_position += match direction {
            MoveDirection::Up => -1,
            MoveDirection::Down => 1,
        };
    }

    Some([(moved.id, moved_position), (neighbor.id, neighbor_position)])
}
