use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::level::Level;
use crate::map::Board;
use crate::state::State;

// pub because it's Level's FromStr error type, but the module is private
// so the type stays unnameable outside the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
    BoxesTargets,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::BoxesTargets => write!(f, "Different number of boxes and targets"),
        }
    }
}

impl std::error::Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format).
///
/// Rows may have different lengths and the level doesn't need a wall
/// border - the solver treats everything beyond the text as free space.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut walls = Vec::new();
    let mut targets = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;
    let mut rows = 0;
    let mut cols = 0;

    for (r, line) in level.lines().enumerate() {
        rows = r + 1;
        for (c, cur_char) in line.chars().enumerate() {
            if c + 1 > cols {
                cols = c + 1;
            }
            let pos = Pos::new(r, c);

            match cur_char {
                '#' => walls.push(pos),
                '@' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                }
                '+' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    targets.push(pos);
                }
                '$' => boxes.push(pos),
                '*' => {
                    boxes.push(pos);
                    targets.push(pos);
                }
                '.' => targets.push(pos),
                ' ' | '-' | '_' => {}
                _ => return Err(ParserErr::Pos(r, c)),
            }
        }
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    if boxes.len() != targets.len() {
        return Err(ParserErr::BoxesTargets);
    }

    Ok(Level::new(
        Board::new(rows, cols, walls, targets),
        State::new(player_pos, boxes),
    ))
}
