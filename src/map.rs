use fnv::FnvHashSet;

use crate::action::Action;
use crate::data::{Pos, DIRECTIONS};
use crate::state::State;

/// The static part of a level - walls and targets never move.
#[derive(Debug, Clone)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    pub walls: Vec<Pos>,
    pub targets: Vec<Pos>,
    wall_set: FnvHashSet<Pos>,
    target_set: FnvHashSet<Pos>,
}

/// An applicable action together with the state it leads to.
#[derive(Debug, Clone)]
pub struct Successor {
    pub action: Action,
    pub state: State,
    pub cost: f64,
}

impl Board {
    pub(crate) fn new(rows: usize, cols: usize, walls: Vec<Pos>, targets: Vec<Pos>) -> Board {
        let wall_set = walls.iter().copied().collect();
        let target_set = targets.iter().copied().collect();
        Board {
            rows,
            cols,
            walls,
            targets,
            wall_set,
            target_set,
        }
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.wall_set.contains(&pos)
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.target_set.contains(&pos)
    }

    /// True when every box sits on a target. A level without boxes is
    /// trivially solved.
    pub fn is_goal(&self, state: &State) -> bool {
        for &pos in &state.boxes {
            if !self.is_target(pos) {
                return false;
            }
        }
        true
    }

    /// Applicable actions in `DIRECTIONS` order with their resulting states.
    ///
    /// A step into a free cell moves the player, a step into a box pushes
    /// it when the cell behind it is free. There is no bounds check -
    /// anything outside the grid is free space and only the depth limit
    /// keeps searches on open levels finite.
    pub fn successors(&self, state: &State) -> Vec<Successor> {
        let mut successors = Vec::new();

        for &dir in &DIRECTIONS {
            let new_player_pos = state.player_pos + dir;
            if let Some(box_index) = state.boxes.iter().position(|&b| b == new_player_pos) {
                let push_dest = new_player_pos + dir;
                if !self.is_wall(push_dest) && !state.boxes.contains(&push_dest) {
                    let mut new_boxes = state.boxes.clone();
                    new_boxes[box_index] = push_dest;
                    successors.push(Successor {
                        action: Action::new(dir, true),
                        state: State::new(new_player_pos, new_boxes),
                        cost: 1.0,
                    });
                }
            } else if !self.is_wall(new_player_pos) {
                successors.push(Successor {
                    action: Action::new(dir, false),
                    state: State::new(new_player_pos, state.boxes.clone()),
                    cost: 1.0,
                });
            }
        }

        successors
    }
}
