use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::formatter::{LevelInfoFormatter, SuccessorListFormatter};
use crate::map::Board;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub board: Board,
    pub state: State,
}

impl Level {
    pub(crate) fn new(board: Board, state: State) -> Self {
        Level { board, state }
    }

    /// Fingerprint of the initial state.
    pub fn id(&self) -> String {
        self.state.fingerprint()
    }

    pub fn info(&self) -> LevelInfoFormatter<'_> {
        LevelInfoFormatter::new(self)
    }

    pub fn successor_list(&self) -> SuccessorListFormatter<'_> {
        SuccessorListFormatter::new(self)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.board.rows {
            // don't print trailing empty cells to match the input level strings
            let mut last_non_empty = 0;
            for c in 0..self.board.cols {
                let pos = Pos::new(r, c);
                if self.board.is_wall(pos)
                    || self.board.is_target(pos)
                    || self.state.player_pos == pos
                    || self.state.boxes.contains(&pos)
                {
                    last_non_empty = c;
                }
            }

            for c in 0..=last_non_empty {
                let pos = Pos::new(r, c);
                let has_box = self.state.boxes.contains(&pos);
                let has_player = self.state.player_pos == pos;
                if self.board.is_wall(pos) {
                    write!(f, "#")?;
                } else if self.board.is_target(pos) {
                    match (has_player, has_box) {
                        (true, _) => write!(f, "+")?,
                        (_, true) => write!(f, "*")?,
                        _ => write!(f, ".")?,
                    }
                } else if has_player {
                    write!(f, "@")?;
                } else if has_box {
                    write!(f, "$")?;
                } else {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
