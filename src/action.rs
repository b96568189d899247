use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// One step of the player, optionally shoving a box ahead of them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub(crate) dir: Dir,
    pub(crate) is_push: bool,
}

impl Action {
    pub(crate) fn new(dir: Dir, is_push: bool) -> Self {
        Action { dir, is_push }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
