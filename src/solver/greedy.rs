use crate::solver::{GridSolver, PathNode};

/// Expands the open node nearest the target, ignoring path cost entirely.
/// Fast and usually direct, but not optimal: a node keeps the predecessor
/// that touched it first, so the path can commit to a longer route. Included
/// for comparison against [AstarSolver](crate::solver::AstarSolver).
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    fn priority(&self, node: &PathNode) -> f32 {
        node.distance_to_target
    }

    /// Claims a neighbour on first visit and never relaxes it again: the
    /// offered distance is always zero, and a claimed node's recorded zero
    /// never exceeds it.
    fn tentative_distance(&self, _current: &PathNode) -> f32 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocking::BlockedSet;
    use crate::grid::MazeGrid;
    use crate::solver::{AstarSolver, DijkstraSolver};
    use grid_util::grid::Grid;
    use grid_util::point::Point;

    /// A serpentine corridor whose cells all rank better than the short
    /// route's uphill entry. Greedy never pays the early heuristic bump, so
    /// it commits to the corridor and returns a strictly longer path than A*.
    ///
    ///   y3  . . . . . . . .
    ///   y2  S # . . . # . .
    ///   y1  . # . # . # . .
    ///   y0  . . . # . . . G
    #[test]
    fn trades_optimality_for_heuristic_descent() {
        let mut grid = MazeGrid::new(8, 4, false);
        for (x, y) in [(1, 1), (1, 2), (3, 0), (3, 1), (5, 1), (5, 2)] {
            grid.set(x, y, true);
        }
        grid.generate_components();
        let blocked = BlockedSet::rebuild(&grid, &[]).unwrap();
        let start = Point::new(0, 2);
        let goal = Point::new(7, 0);

        let greedy = GreedySolver
            .find_path(&grid, &blocked, start, goal)
            .unwrap()
            .unwrap();
        let astar = AstarSolver
            .find_path(&grid, &blocked, start, goal)
            .unwrap()
            .unwrap();
        let dijkstra = DijkstraSolver
            .find_path(&grid, &blocked, start, goal)
            .unwrap()
            .unwrap();

        assert_eq!(astar.len(), dijkstra.len());
        assert_eq!(astar.len(), 12);
        assert_eq!(greedy.len(), 14);
        assert!(greedy.len() > astar.len());
    }

    /// On an unobstructed straight line the greedy policy is as direct as
    /// anything else.
    #[test]
    fn straight_line_is_direct() {
        let mut grid = MazeGrid::new(6, 1, false);
        grid.generate_components();
        let blocked = BlockedSet::rebuild(&grid, &[]).unwrap();
        let path = GreedySolver
            .find_path(&grid, &blocked, Point::new(0, 0), Point::new(5, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 6);
    }
}
