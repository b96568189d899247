use crate::action::Action;
use crate::state::State;

/// One node of the search tree.
///
/// Nodes live in the solver's arena so the parent link can be a plain
/// reference and backtracking is just pointer chasing. The root has no
/// parent and no action.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) id: u64,
    pub(crate) parent: Option<&'a SearchNode<'a>>,
    pub(crate) state: State,
    pub(crate) fingerprint: String,
    pub(crate) action: Option<Action>,
    pub(crate) depth: u32,
    pub(crate) cost: f64,
    pub(crate) heuristic: f64,
    pub(crate) value: f64,
}
