use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How the frontier orders nodes. All five share one search loop,
/// they only differ in the value assigned to each node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Dfs,
    Uc,
    AStar,
    Greedy,
}

/// Tags accepted on the command line (case-insensitive).
pub const STRATEGY_TAGS: [&str; 6] = ["bfs", "dfs", "uc", "a*", "astar", "greedy"];

impl Strategy {
    /// Node value the frontier sorts by - lower pops first.
    ///
    /// DFS uses the reciprocal of depth so the deepest node has the
    /// lowest value and the one min-pop frontier works for all strategies.
    pub(crate) fn value(self, depth: u32, cost: f64, heuristic: f64) -> f64 {
        match self {
            Strategy::Bfs => f64::from(depth),
            Strategy::Dfs => 1.0 / f64::from(depth + 1),
            Strategy::Uc => cost,
            Strategy::AStar => cost + heuristic,
            Strategy::Greedy => heuristic,
        }
    }

    /// Informed strategies get the real heuristic, the rest see zero.
    pub(crate) fn informed(self) -> bool {
        matches!(self, Strategy::AStar | Strategy::Greedy)
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::Uc => write!(f, "uc"),
            Strategy::AStar => write!(f, "a*"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStrategyErr(String);

impl Display for ParseStrategyErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown strategy: {}", self.0)
    }
}

impl Error for ParseStrategyErr {}

impl FromStr for Strategy {
    type Err = ParseStrategyErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "uc" => Ok(Strategy::Uc),
            "a*" | "astar" => Ok(Strategy::AStar),
            "greedy" => Ok(Strategy::Greedy),
            _ => Err(ParseStrategyErr(s.to_owned())),
        }
    }
}
