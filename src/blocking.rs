use crate::error::GridError;
use crate::grid::MazeGrid;
use fxhash::FxHashSet;
use grid_util::point::Point;

/// The set of cells an agent cannot enter this turn: static walls plus the
/// cells currently occupied by other agents.
///
/// Agents move between turns, so a [BlockedSet] is a snapshot; rebuild it with
/// [BlockedSet::rebuild] at the start of every search call rather than caching
/// one across turns. The agent asking for a path must not be in `occupied`,
/// or its own cell blocks the search.
#[derive(Clone, Debug)]
pub struct BlockedSet {
    cells: FxHashSet<Point>,
    rows: usize,
    columns: usize,
}

impl BlockedSet {
    /// Snapshots the blocking state from the grid's walls and the given
    /// occupied cells. Occupied cells outside the grid are rejected.
    pub fn rebuild(grid: &MazeGrid, occupied: &[Point]) -> Result<BlockedSet, GridError> {
        let mut cells: FxHashSet<Point> = grid.wall_positions().into_iter().collect();
        for p in occupied {
            if !grid.in_bounds(p.x, p.y) {
                return Err(GridError::OutOfBounds {
                    x: p.x,
                    y: p.y,
                    rows: grid.rows(),
                    columns: grid.columns(),
                });
            }
            cells.insert(*p);
        }
        Ok(BlockedSet {
            cells,
            rows: grid.rows(),
            columns: grid.columns(),
        })
    }

    /// Whether the coordinate can be entered this turn. Out-of-bounds
    /// queries fail loudly instead of guessing either way.
    pub fn is_blocked(&self, p: Point) -> Result<bool, GridError> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.rows || p.y as usize >= self.columns {
            return Err(GridError::OutOfBounds {
                x: p.x,
                y: p.y,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.cells.contains(&p))
    }

    /// Unchecked membership test for in-bounds points the search already
    /// validated.
    pub(crate) fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
