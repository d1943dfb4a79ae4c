use crate::solver::{GridSolver, PathNode};

/// Expands the open node nearest the start, ignoring the target entirely.
/// Optimal under uniform step cost; the baseline the heuristic policies are
/// measured against.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn priority(&self, node: &PathNode) -> f32 {
        node.distance_from_start
    }
}
