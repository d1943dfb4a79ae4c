use crate::error::GridError;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;

/// The contents of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Wall,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }
}

/// The four axis-aligned neighbours of a point, in carving order
/// (left, up, right, down). Callers filter for bounds and walkability.
pub fn axis_neighborhood(point: Point) -> [Point; 4] {
    [
        Point::new(point.x - 1, point.y),
        Point::new(point.x, point.y + 1),
        Point::new(point.x + 1, point.y),
        Point::new(point.x, point.y - 1),
    ]
}

/// [MazeGrid] holds the maze layout as a [BoolGrid] in which [true] marks a
/// wall, together with connected components over the floor cells maintained
/// in a [UnionFind] structure. Components give searches a cheap negative:
/// dynamic blockers only ever remove reachability, so two cells in different
/// static components can never be connected this turn.
///
/// The x index runs over the rows dimension and the y index over the columns
/// dimension, matching the generator's carving axes. Implements [Grid] by
/// building on [BoolGrid].
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl MazeGrid {
    /// Number of cells along the x axis.
    pub fn rows(&self) -> usize {
        self.grid.width
    }

    /// Number of cells along the y axis.
    pub fn columns(&self) -> usize {
        self.grid.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// Looks up a cell, failing loudly on out-of-bounds coordinates.
    pub fn cell(&self, pos: Point) -> Result<Cell, GridError> {
        if !self.in_bounds(pos.x, pos.y) {
            return Err(GridError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        if self.grid.get(pos.x as usize, pos.y as usize) {
            Ok(Cell::Wall)
        } else {
            Ok(Cell::Floor)
        }
    }

    fn open_neighbours(&self, point: Point) -> Vec<Point> {
        axis_neighborhood(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect::<Vec<Point>>()
    }

    /// All floor coordinates in enumeration order (ascending x, then y).
    pub fn floor_positions(&self) -> Vec<Point> {
        iproduct!(0..self.grid.width, 0..self.grid.height)
            .filter(|&(x, y)| !self.grid.get(x, y))
            .map(|(x, y)| Point::new(x as i32, y as i32))
            .collect()
    }

    /// All wall coordinates in enumeration order (ascending x, then y).
    pub fn wall_positions(&self) -> Vec<Point> {
        iproduct!(0..self.grid.width, 0..self.grid.height)
            .filter(|&(x, y)| self.grid.get(x, y))
            .map(|(x, y)| Point::new(x as i32, y as i32))
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component. Out-of-bounds
    /// points are unreachable by definition.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up axis-adjacent floor
    /// cells into the same components.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for (x, y) in iproduct!(0..w, 0..h) {
            if !self.grid.get(x, y) {
                let parent_ix = self.grid.get_ix(x, y);
                let point = Point::new(x as i32, y as i32);
                // The forward half-neighbourhood suffices to link every
                // adjacent pair exactly once.
                let neighbours = [
                    Point::new(point.x + 1, point.y),
                    Point::new(point.x, point.y + 1),
                ]
                .into_iter()
                .filter(|p| self.can_move_to(*p))
                .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                .collect::<Vec<usize>>();
                for ix in neighbours {
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.grid.height).rev() {
            for x in 0..self.grid.width {
                if self.grid.get(x, y) {
                    write!(f, "#")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<bool> for MazeGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        MazeGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    fn set(&mut self, x: usize, y: usize, wall: bool) {
        let p = Point::new(x as i32, y as i32);
        if self.grid.get(x, y) != wall && wall {
            self.components_dirty = true;
        } else {
            for n in self.open_neighbours(p) {
                self.components.union(
                    self.grid.get_ix(x, y),
                    self.grid.get_ix(n.x as usize, n.y as usize),
                );
            }
        }
        self.grid.set(x, y, wall);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
