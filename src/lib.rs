//! # maze_chase
//!
//! A grid engine for turn-based chase games: carves a
//! [perfect maze](https://en.wikipedia.org/wiki/Maze_generation_algorithm)
//! with randomized recursive backtracking, then computes single-step pursuit
//! moves with a choice of
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm), Greedy
//! Best-First or [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! search over the non-blocked cells. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! The engine is synchronous and purely in-memory: it consumes grid
//! dimensions, a blocked-cell snapshot and two positions, and yields a maze
//! layout or a one-step direction. Rendering, input and turn scheduling live
//! with the caller.
//!
//! ```
//! use maze_chase::{compute_step, generate_maze, Algorithm, BlockedSet};
//!
//! let level = generate_maze(11, 11, 7).unwrap();
//! let agent = level.floor_positions[0];
//! let target = *level.floor_positions.last().unwrap();
//! // Walls plus any other agents; rebuilt every turn.
//! let blocked = BlockedSet::rebuild(&level.grid, &[]).unwrap();
//! let step = compute_step(Algorithm::AStar, &level.grid, &blocked, agent, target).unwrap();
//! assert!(step.is_some(), "a perfect maze connects every pair of floor cells");
//! ```

pub mod blocking;
pub mod error;
pub mod grid;
pub mod mazegen;
pub mod movement;
pub mod solver;
pub mod world;

pub use crate::blocking::BlockedSet;
pub use crate::error::GridError;
pub use crate::grid::{Cell, MazeGrid};
pub use crate::mazegen::{generate_maze, generate_maze_with, MazeLevel};
pub use crate::movement::{resolve_step, Direction};
pub use crate::solver::{Algorithm, AstarSolver, DijkstraSolver, GreedySolver, GridSolver};

use grid_util::point::Point;

/// Computes the agent's next step towards the target under the chosen
/// algorithm, against this turn's blocked-cell snapshot.
///
/// Returns `Ok(Some(direction))` for a move ([Direction::None] when the agent
/// already stands on the target), `Ok(None)` when no path exists this turn
/// (the caller holds position), and an error for out-of-bounds positions.
/// Identical inputs always produce identical directions.
pub fn compute_step(
    algorithm: Algorithm,
    grid: &MazeGrid,
    blocked: &BlockedSet,
    agent: Point,
    target: Point,
) -> Result<Option<Direction>, GridError> {
    match algorithm {
        Algorithm::Dijkstra => DijkstraSolver.first_step(grid, blocked, agent, target),
        Algorithm::GreedyBestFirst => GreedySolver.first_step(grid, blocked, agent, target),
        Algorithm::AStar => AstarSolver.first_step(grid, blocked, agent, target),
    }
}
