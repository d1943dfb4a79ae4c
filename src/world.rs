//! Mapping between grid indices and world-space positions.
//!
//! The engine works exclusively in integer grid coordinates; these pure
//! functions exist for the presentation boundary, which centres the board by
//! offsetting it by `(-(rows / 2), -(columns / 2))`. Conversions round-trip
//! exactly so membership tests never compare floats against indices.

use grid_util::point::Point;

/// World-space position of a grid cell on a centred rows×columns board.
pub fn grid_to_world(p: Point, rows: usize, columns: usize) -> (f32, f32) {
    let offset_x = (rows / 2) as i32;
    let offset_y = (columns / 2) as i32;
    ((p.x - offset_x) as f32, (p.y - offset_y) as f32)
}

/// Grid cell of a world-space position on a centred rows×columns board.
/// Returns [None] for positions that are not exactly on a cell or fall
/// outside the board.
pub fn world_to_grid(x: f32, y: f32, rows: usize, columns: usize) -> Option<Point> {
    if x.fract() != 0.0 || y.fract() != 0.0 {
        return None;
    }
    let gx = x as i32 + (rows / 2) as i32;
    let gy = y as i32 + (columns / 2) as i32;
    if gx < 0 || gy < 0 || gx as usize >= rows || gy as usize >= columns {
        return None;
    }
    Some(Point::new(gx, gy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    #[test]
    fn round_trips_exactly() {
        for (rows, columns) in [(11, 11), (8, 5), (3, 9)] {
            for (x, y) in iproduct!(0..rows, 0..columns) {
                let p = Point::new(x as i32, y as i32);
                let (wx, wy) = grid_to_world(p, rows, columns);
                assert_eq!(world_to_grid(wx, wy, rows, columns), Some(p));
            }
        }
    }

    #[test]
    fn centre_cell_maps_to_origin() {
        assert_eq!(grid_to_world(Point::new(5, 5), 11, 11), (0.0, 0.0));
    }

    #[test]
    fn off_cell_positions_are_rejected() {
        assert_eq!(world_to_grid(0.5, 0.0, 11, 11), None);
        assert_eq!(world_to_grid(0.0, -0.25, 11, 11), None);
    }

    #[test]
    fn off_board_positions_are_rejected() {
        assert_eq!(world_to_grid(-6.0, 0.0, 11, 11), None);
        assert_eq!(world_to_grid(6.0, 0.0, 11, 11), None);
    }
}
