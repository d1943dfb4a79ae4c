use crate::error::GridError;
use crate::grid::MazeGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Carving order before shuffling: left, up, right, down.
const CARVE_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A generated level: the maze layout plus the derived coordinate lists the
/// gameplay layer consumes, floor cells for spawn placement and wall cells
/// for promotion into a blocked set.
#[derive(Clone, Debug)]
pub struct MazeLevel {
    pub grid: MazeGrid,
    /// Floor coordinates in enumeration order (ascending x, then y).
    pub floor_positions: Vec<Point>,
    /// Wall coordinates in the same order.
    pub walls: Vec<Point>,
}

impl MazeLevel {
    /// Removes and returns a uniformly random remaining floor position, for
    /// placing exits, pickups and spawns without collisions. The relative
    /// order of the remaining positions is preserved.
    pub fn take_random_floor<R: Rng>(&mut self, rng: &mut R) -> Option<Point> {
        if self.floor_positions.is_empty() {
            return None;
        }
        let ix = rng.gen_range(0..self.floor_positions.len());
        Some(self.floor_positions.remove(ix))
    }
}

/// One in-flight carve frame: a cell and the shuffled directions still to try
/// from it. Kept on an explicit stack so maze size is bounded by heap, not by
/// native call depth.
struct CarveFrame {
    cell: Point,
    directions: [(i32, i32); 4],
    tried: usize,
}

/// Generates a perfect maze with a seeded RNG. The same seed and dimensions
/// always reproduce the same layout.
pub fn generate_maze(rows: usize, columns: usize, seed: u64) -> Result<MazeLevel, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_maze_with(rows, columns, &mut rng)
}

/// Generates a perfect maze into a rows×columns grid using randomized
/// recursive backtracking, driven by the caller's RNG.
///
/// Every cell starts as wall. Carving begins at a random cell with odd index
/// on both axes and repeatedly jumps two cells in a shuffled direction,
/// opening the intermediate and far cell whenever the far cell is still wall.
/// Jumps never leave the interior `[1, dim-2]`, so the outer border stays
/// solid wall and the result is a perfect maze: every pair of floor cells is
/// connected by exactly one path.
pub fn generate_maze_with<R: Rng>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<MazeLevel, GridError> {
    if rows < 3 || columns < 3 {
        return Err(GridError::InvalidDimensions { rows, columns });
    }
    let mut grid = MazeGrid::new(rows, columns, true);

    // A random odd interior index per axis. For even dimensions the last odd
    // index would be the border row, so sampling is restricted to [1, dim-2].
    let start_x = 2 * rng.gen_range(0..(rows - 1) / 2) + 1;
    let start_y = 2 * rng.gen_range(0..(columns - 1) / 2) + 1;
    grid.set(start_x, start_y, false);

    carve(&mut grid, Point::new(start_x as i32, start_y as i32), rng);

    let floor_positions = grid.floor_positions();
    let walls = grid.wall_positions();
    debug!(
        "carved {}x{} maze: {} floor cells",
        rows,
        columns,
        floor_positions.len()
    );
    Ok(MazeLevel {
        grid,
        floor_positions,
        walls,
    })
}

fn shuffled_directions<R: Rng>(rng: &mut R) -> [(i32, i32); 4] {
    let mut directions = CARVE_DIRECTIONS;
    directions.shuffle(rng);
    directions
}

fn carve<R: Rng>(grid: &mut MazeGrid, start: Point, rng: &mut R) {
    let max_x = grid.rows() as i32 - 2;
    let max_y = grid.columns() as i32 - 2;
    let mut stack = vec![CarveFrame {
        cell: start,
        directions: shuffled_directions(rng),
        tried: 0,
    }];
    while let Some(frame) = stack.last_mut() {
        if frame.tried == frame.directions.len() {
            stack.pop();
            continue;
        }
        let (dx, dy) = frame.directions[frame.tried];
        frame.tried += 1;
        let from = frame.cell;
        let far = Point::new(from.x + 2 * dx, from.y + 2 * dy);
        if far.x < 1 || far.x > max_x || far.y < 1 || far.y > max_y {
            continue;
        }
        if !grid.get(far.x as usize, far.y as usize) {
            // Already carved; connecting here would close a loop.
            continue;
        }
        grid.set(far.x as usize, far.y as usize, false);
        grid.set((from.x + dx) as usize, (from.y + dy) as usize, false);
        stack.push(CarveFrame {
            cell: far,
            directions: shuffled_directions(rng),
            tried: 0,
        });
    }
}
