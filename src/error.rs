use thiserror::Error;

/// Errors reported by maze generation and search entry points.
///
/// A search that merely fails to find a path is not an error; that outcome is
/// reported as `Ok(None)` so the caller can hold position for the turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The requested grid is too small to carve a maze into.
    #[error("grid dimensions {rows}x{columns} are too small to carve a maze (minimum 3x3)")]
    InvalidDimensions { rows: usize, columns: usize },
    /// A coordinate passed to a blocking or search lookup lies outside the
    /// grid. Reported loudly instead of being treated as blocked or open,
    /// which would mask caller bugs.
    #[error("coordinate ({x}, {y}) lies outside the {rows}x{columns} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        rows: usize,
        columns: usize,
    },
}
