use crate::game::directions::Direction;
use crate::game::path::PathState;

/// Directions that extend `state` to an on-board, unvisited neighbour.
///
/// Reversing the last step is excluded explicitly even though the visited
/// check already rules it out.
pub fn legal_moves(state: &PathState<'_>) -> Vec<Direction> {
    let current = state.current();
    let reverse = state.last_direction().map(Direction::opposite);

    Direction::ALL
        .into_iter()
        .filter(|&direction| Some(direction) != reverse)
        .filter(|&direction| match current.step(direction) {
            Some(target) => !state.has_visited(target),
            None => false,
        })
        .collect()
}
