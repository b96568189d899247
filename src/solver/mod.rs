mod frontier;
mod heuristic;
mod node;
mod stats;
mod visited;

pub use self::stats::Stats;

use std::fmt::{self, Debug, Display, Formatter};

use log::debug;
use typed_arena::Arena;

use crate::action::Action;
use crate::config::Strategy;
use crate::formatter::SolutionFormatter;
use crate::level::Level;
use crate::map::Board;
use crate::state::State;
use crate::Solve;

use self::frontier::Frontier;
use self::heuristic::nearest_target_sum;
use self::node::SearchNode;
use self::visited::VisitedSet;

/// Snapshot of one node on the solution path.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: u64,
    pub fingerprint: String,
    pub parent_id: Option<u64>,
    pub action: Option<Action>,
    pub depth: u32,
    pub cost: f64,
    pub heuristic: f64,
    pub value: f64,
}

impl Display for NodeRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},", self.id, self.fingerprint)?;
        match self.parent_id {
            None => write!(f, "none,")?,
            Some(parent_id) => write!(f, "{},", parent_id)?,
        }
        match self.action {
            None => write!(f, "none,")?,
            Some(action) => write!(f, "{},", action)?,
        }
        write!(
            f,
            "{},{:.2},{:.2},{:.2}",
            self.depth, self.cost, self.heuristic, self.value
        )
    }
}

pub struct Solution {
    pub path: Option<Vec<NodeRecord>>,
    pub stats: Stats,
    pub(crate) strategy: Strategy,
}

impl Solution {
    fn new(path: Option<Vec<NodeRecord>>, stats: Stats, strategy: Strategy) -> Self {
        Self {
            path,
            stats,
            strategy,
        }
    }

    pub fn listing(&self) -> SolutionFormatter<'_> {
        SolutionFormatter::new(self)
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref records) => writeln!(f, "{}: {}", self.strategy, records.len() - 1)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, strategy: Strategy, max_depth: u32, print_status: bool) -> Solution {
        solve(self, strategy, max_depth, print_status)
    }
}

fn solve(level: &Level, strategy: Strategy, max_depth: u32, print_status: bool) -> Solution {
    debug!("Solving with {}, max depth {}", strategy, max_depth);
    let arena = Arena::new();
    let solution = search(&arena, level, strategy, max_depth, print_status);
    debug!("Search done");
    solution
}

fn search<'a>(
    arena: &'a Arena<SearchNode<'a>>,
    level: &Level,
    strategy: Strategy,
    max_depth: u32,
    print_status: bool,
) -> Solution {
    let mut stats = Stats::new();
    let mut frontier = Frontier::new();
    let mut visited = VisitedSet::new();

    let heuristic = node_heuristic(&level.board, &level.state, strategy);
    let root = &*arena.alloc(SearchNode {
        id: 0,
        parent: None,
        state: level.state.clone(),
        fingerprint: level.state.fingerprint(),
        action: None,
        depth: 0,
        cost: 0.0,
        heuristic,
        value: strategy.value(0, 0.0, heuristic),
    });
    stats.add_created(root);
    frontier.add(root);
    let mut next_id = 1;

    while !frontier.is_empty() {
        let node = frontier.pop_min().unwrap();

        // every popped node gets the goal test - even pruned and duplicate ones
        if level.board.is_goal(&node.state) {
            debug!("Solved, backtracking path");
            return Solution::new(Some(backtrack_path(node)), stats, strategy);
        }

        if node.depth >= max_depth {
            stats.add_pruned(node);
            continue;
        }
        if visited.contains(&node.fingerprint) {
            stats.add_reached_duplicate(node);
            continue;
        }
        if stats.add_unique_visited(node) && print_status {
            println!("Visited new depth: {}", node.depth);
            println!("{:?}", stats);
        }
        visited.mark(&node.fingerprint);

        for successor in level.board.successors(&node.state) {
            // insert now and deal with duplicates when popped
            let depth = node.depth + 1;
            let cost = node.cost + successor.cost;
            let heuristic = node_heuristic(&level.board, &successor.state, strategy);
            let fingerprint = successor.state.fingerprint();
            let child = &*arena.alloc(SearchNode {
                id: next_id,
                parent: Some(node),
                state: successor.state,
                fingerprint,
                action: Some(successor.action),
                depth,
                cost,
                heuristic,
                value: strategy.value(depth, cost, heuristic),
            });
            next_id += 1;
            stats.add_created(child);
            frontier.add(child);
        }
    }

    debug!("Frontier exhausted after {} unique states", visited.len());
    Solution::new(None, stats, strategy)
}

fn node_heuristic(board: &Board, state: &State, strategy: Strategy) -> f64 {
    if strategy.informed() {
        nearest_target_sum(board, state)
    } else {
        0.0
    }
}

fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<NodeRecord> {
    let mut ret = Vec::new();
    let mut node = Some(final_node);
    while let Some(n) = node {
        ret.push(record(n));
        node = n.parent;
    }
    ret.reverse();
    ret
}

fn record(node: &SearchNode<'_>) -> NodeRecord {
    NodeRecord {
        id: node.id,
        fingerprint: node.fingerprint.clone(),
        parent_id: node.parent.map(|parent| parent.id),
        action: node.action,
        depth: node.depth,
        cost: node.cost,
        heuristic: node.heuristic,
        value: node.value,
    }
}
