use crate::blocking::BlockedSet;
use crate::error::GridError;
use crate::grid::{axis_neighborhood, MazeGrid};
use crate::movement::{resolve_step, Direction};
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::iproduct;
use log::warn;

pub mod astar;
pub mod dijkstra;
pub mod greedy;

pub use astar::AstarSolver;
pub use dijkstra::DijkstraSolver;
pub use greedy::GreedySolver;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Selects which frontier policy drives an agent's next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    GreedyBestFirst,
    AStar,
}

/// Per-cell search record. A fresh set of nodes is allocated for every search
/// call and discarded once the first hop has been extracted; nodes are never
/// shared across turns.
#[derive(Clone, Debug)]
pub struct PathNode {
    pub position: Point,
    /// Steps from the start cell; infinite until the node is first relaxed.
    pub distance_from_start: f32,
    /// Manhattan distance to the target cell; infinite until first inspected.
    pub distance_to_target: f32,
    /// Index of the node this one was relaxed from, within the same search.
    pub(crate) predecessor: Option<usize>,
}

fn manhattan(a: Point, b: Point) -> f32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f32
}

/// One search policy over the shared frontier skeleton. The three policies
/// differ only in how they rank frontier nodes and what distance they offer a
/// neighbour on relaxation; the loop itself lives in
/// [find_path](GridSolver::find_path).
pub trait GridSolver {
    /// Ranks an open node; the open node with the smallest priority is
    /// expanded next.
    fn priority(&self, node: &PathNode) -> f32;

    /// The distance-from-start offered to a neighbour of `current` during
    /// relaxation. A neighbour whose recorded distance exceeds the offer
    /// takes it and repoints its predecessor at `current`.
    fn tentative_distance(&self, current: &PathNode) -> f32 {
        current.distance_from_start + 1.0
    }

    /// Computes a path from `start` to `goal` over the non-blocked cells of
    /// the grid, or [None] if no path exists this turn.
    ///
    /// Nodes are enumerated and ranked in row-major order (ascending x, then
    /// ascending y); the frontier minimum keeps the first node encountered at
    /// the minimal priority, which makes equal-priority tie-breaking stable
    /// and the whole search deterministic for identical inputs.
    ///
    /// A blocked start or goal is reported as no path. Out-of-bounds
    /// coordinates are an error.
    fn find_path(
        &self,
        grid: &MazeGrid,
        blocked: &BlockedSet,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, GridError> {
        for p in [start, goal] {
            if !grid.in_bounds(p.x, p.y) {
                return Err(GridError::OutOfBounds {
                    x: p.x,
                    y: p.y,
                    rows: grid.rows(),
                    columns: grid.columns(),
                });
            }
        }
        if start == goal {
            return Ok(Some(vec![start]));
        }
        if blocked.contains(start) || blocked.contains(goal) {
            return Ok(None);
        }
        // Occupied cells only ever remove reachability from the static
        // layout, so a component mismatch is already conclusive.
        if !grid.components_dirty && grid.unreachable(&start, &goal) {
            return Ok(None);
        }

        let mut nodes: Vec<PathNode> = Vec::new();
        let mut index_of: FxIndexMap<Point, usize> = FxIndexMap::default();
        for (x, y) in iproduct!(0..grid.rows(), 0..grid.columns()) {
            let position = Point::new(x as i32, y as i32);
            if blocked.contains(position) {
                continue;
            }
            index_of.insert(position, nodes.len());
            nodes.push(PathNode {
                position,
                distance_from_start: f32::INFINITY,
                distance_to_target: f32::INFINITY,
                predecessor: None,
            });
        }
        let start_ix = index_of[&start];
        let goal_ix = index_of[&goal];
        nodes[start_ix].distance_from_start = 0.0;

        let mut open = vec![true; nodes.len()];
        let mut open_count = nodes.len();
        let mut current = start_ix;
        // One node closes per iteration, so the loop cannot run longer than
        // this even on corrupted input.
        let max_iterations = grid.rows() * grid.columns();
        let mut iterations = 0;
        loop {
            if current == goal_ix {
                return Ok(self.reconstruct(&nodes, start_ix, goal_ix));
            }
            iterations += 1;
            if iterations > max_iterations {
                warn!(
                    "search did not terminate within {max_iterations} iterations, reporting no path"
                );
                return Ok(None);
            }

            let offer = self.tentative_distance(&nodes[current]);
            for neighbour in axis_neighborhood(nodes[current].position) {
                let Some(&ix) = index_of.get(&neighbour) else {
                    continue;
                };
                if !open[ix] {
                    continue;
                }
                let node = &mut nodes[ix];
                node.distance_to_target = manhattan(neighbour, goal);
                if node.distance_from_start > offer {
                    node.distance_from_start = offer;
                    node.predecessor = Some(current);
                }
            }

            open[current] = false;
            open_count -= 1;
            if open_count == 0 {
                return Ok(None);
            }
            let mut best: Option<usize> = None;
            for (ix, node) in nodes.iter().enumerate() {
                if !open[ix] {
                    continue;
                }
                match best {
                    Some(b) if self.priority(node) >= self.priority(&nodes[b]) => {}
                    _ => best = Some(ix),
                }
            }
            let next = best.expect("open_count > 0 guarantees an open node");
            if self.priority(&nodes[next]).is_infinite() {
                // Only unreached nodes are left; the frontier is exhausted.
                return Ok(None);
            }
            current = next;
        }
    }

    /// The first hop of the computed path as a movement direction:
    /// [Direction::None] when the agent already stands on the target, [None]
    /// when no path exists this turn (callers hold position).
    fn first_step(
        &self,
        grid: &MazeGrid,
        blocked: &BlockedSet,
        agent: Point,
        target: Point,
    ) -> Result<Option<Direction>, GridError> {
        match self.find_path(grid, blocked, agent, target)? {
            Some(path) if path.len() >= 2 => Ok(Some(resolve_step(path[0], path[1]))),
            Some(_) => Ok(Some(Direction::None)),
            None => Ok(None),
        }
    }

    /// Walks predecessor links back from the goal and reverses them into a
    /// start-to-goal path.
    #[doc(hidden)]
    fn reconstruct(
        &self,
        nodes: &[PathNode],
        start_ix: usize,
        goal_ix: usize,
    ) -> Option<Vec<Point>> {
        nodes[goal_ix].predecessor?;
        let mut path: Vec<Point> = itertools::unfold(Some(goal_ix), |state| {
            let ix = (*state)?;
            let node = &nodes[ix];
            *state = node.predecessor;
            Some(node.position)
        })
        .collect();
        path.reverse();
        if path.first() != Some(&nodes[start_ix].position) {
            warn!("goal was expanded with a predecessor chain that misses the start");
            return None;
        }
        Some(path)
    }
}
