use std::collections::VecDeque;

use super::node::SearchNode;

/// Frontier ordered by (value, id), both ascending.
///
/// The deque is kept sorted on insert, so the node that pops next is
/// always the lowest-valued one and ties go to the node created first.
#[derive(Debug)]
pub(crate) struct Frontier<'a> {
    nodes: VecDeque<&'a SearchNode<'a>>,
}

impl<'a> Frontier<'a> {
    pub(crate) fn new() -> Self {
        Frontier {
            nodes: VecDeque::new(),
        }
    }

    pub(crate) fn add(&mut self, node: &'a SearchNode<'a>) {
        let index = self
            .nodes
            .binary_search_by(|probe| {
                probe
                    .value
                    .total_cmp(&node.value)
                    .then_with(|| probe.id.cmp(&node.id))
            })
            .unwrap_or_else(|index| index);
        self.nodes.insert(index, node);
    }

    pub(crate) fn pop_min(&mut self) -> Option<&'a SearchNode<'a>> {
        self.nodes.pop_front()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
