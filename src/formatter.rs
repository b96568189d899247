use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::level::Level;
use crate::solver::Solution;

/// One state or level attribute per line, lists in scan order.
pub struct LevelInfoFormatter<'a> {
    level: &'a Level,
}

impl<'a> LevelInfoFormatter<'a> {
    pub(crate) fn new(level: &'a Level) -> Self {
        Self { level }
    }
}

impl Display for LevelInfoFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = &self.level.board;
        writeln!(f, "ID:{}", self.level.id())?;
        writeln!(f, "Rows:{}", board.rows)?;
        writeln!(f, "Columns:{}", board.cols)?;
        write!(f, "Walls:")?;
        write_pos_list(f, &board.walls)?;
        writeln!(f)?;
        write!(f, "Targets:")?;
        write_pos_list(f, &board.targets)?;
        writeln!(f)?;
        writeln!(f, "Player:{}", self.level.state.player_pos)?;
        write!(f, "Boxes:")?;
        write_pos_list(f, &self.level.state.boxes)?;
        writeln!(f)
    }
}

impl Debug for LevelInfoFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The level's fingerprint followed by one `[action,fingerprint,cost]`
/// line per applicable action.
pub struct SuccessorListFormatter<'a> {
    level: &'a Level,
}

impl<'a> SuccessorListFormatter<'a> {
    pub(crate) fn new(level: &'a Level) -> Self {
        Self { level }
    }
}

impl Display for SuccessorListFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID:{}", self.level.id())?;
        for successor in self.level.board.successors(&self.level.state) {
            writeln!(
                f,
                "[{},{},{}]",
                successor.action,
                successor.state.fingerprint(),
                successor.cost
            )?;
        }
        Ok(())
    }
}

impl Debug for SuccessorListFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The solution path as one record per line, or `NO SOLUTION`.
pub struct SolutionFormatter<'a> {
    solution: &'a Solution,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution.path {
            None => writeln!(f, "NO SOLUTION"),
            Some(ref records) => {
                for record in records {
                    writeln!(f, "{}", record)?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn write_pos_list(f: &mut Formatter<'_>, positions: &[Pos]) -> fmt::Result {
    write!(f, "[")?;
    for (i, pos) in positions.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", pos)?;
    }
    write!(f, "]")
}
