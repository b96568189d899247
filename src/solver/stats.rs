use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::solver::node::SearchNode;

/// Per-depth counters of what happened to created nodes.
///
/// Every node is counted as created, then at most once more depending on
/// how the search disposed of it when popping it.
#[derive(PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
    pruned_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
            pruned_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub fn total_pruned(&self) -> i32 {
        self.pruned_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.depth)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node.depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node.depth)
    }

    pub(crate) fn add_pruned(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.pruned_states, node.depth)
    }

    fn add(counts: &mut Vec<i32>, depth: u32) -> bool {
        let mut ret = false;

        // while because some depths might be skipped - duplicates don't appear on every level
        while depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "pruned by depth: {:?}", self.pruned_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total pruned: {}", self.total_pruned().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let pruned = self.total_pruned();
        let left = created - visited - duplicates - pruned;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Pruned at the depth limit total: {}",
            pruned.separated_string()
        )?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Visited"),
            Cell::new("Duplicates"),
            Cell::new("Pruned"),
        ]));
        // created is the longest vec - every node is counted there first
        for depth in 0..self.created_states.len() {
            let visited = self.visited_states.get(depth).copied().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).copied().unwrap_or(0);
            let pruned = self.pruned_states.get(depth).copied().unwrap_or(0);
            table.add_row(Row::new(vec![
                Cell::new(&depth.to_string()),
                Cell::new(&self.created_states[depth].separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&pruned.separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}
