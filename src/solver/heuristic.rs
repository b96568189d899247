use crate::map::Board;
use crate::state::State;

/// Sum over all boxes of the Manhattan distance to the nearest target.
///
/// A cheap greedy guess, not guaranteed admissible. Walls and other
/// boxes are ignored and targets are not claimed - several boxes may
/// count the same target. a* and greedy follow it without promising
/// optimal paths.
pub(crate) fn nearest_target_sum(board: &Board, state: &State) -> f64 {
    let mut target_dist_sum = 0;
    for box_pos in &state.boxes {
        let mut min = i32::MAX;
        for &target in &board.targets {
            let dist = box_pos.dist(target);
            if dist < min {
                min = dist;
            }
        }
        target_dist_sum += min;
    }
    f64::from(target_dist_sum)
}
